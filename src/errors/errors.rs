use std::fmt::Display;

use thiserror::Error;

use crate::{grammar::symbols::SymbolKind, Position};

#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn invalid_argument(argument: &'static str) -> Self {
        Error::new(ErrorImpl::InvalidArgument { argument }, None)
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidArgument { .. } => "InvalidArgument",
            ErrorImpl::Io(_) => "Io",
            ErrorImpl::Config(_) => "Config",
            ErrorImpl::MissingSpecialSymbol { .. } => "MissingSpecialSymbol",
            ErrorImpl::DuplicateSpecialSymbol { .. } => "DuplicateSpecialSymbol",
            ErrorImpl::InvalidAcceptSymbol { .. } => "InvalidAcceptSymbol",
            ErrorImpl::UnknownSymbol { .. } => "UnknownSymbol",
            ErrorImpl::UnknownCharSet { .. } => "UnknownCharSet",
            ErrorImpl::UnknownDfaState { .. } => "UnknownDfaState",
            ErrorImpl::EmptyDfa => "EmptyDfa",
            ErrorImpl::EmptyCharRange { .. } => "EmptyCharRange",
            ErrorImpl::NondeterministicTransition { .. } => "NondeterministicTransition",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidArgument { argument } => ErrorTip::Suggestion(format!(
                "A tokenizer needs both a source and a grammar, `{}` was missing",
                argument
            )),
            ErrorImpl::Io(_) => ErrorTip::None,
            ErrorImpl::Config(_) => ErrorTip::Suggestion(String::from(
                "Check the configuration JSON against `TokenizerConfig`",
            )),
            ErrorImpl::MissingSpecialSymbol { kind } => ErrorTip::Suggestion(format!(
                "Add exactly one symbol of kind {:?} to the grammar",
                kind
            )),
            ErrorImpl::DuplicateSpecialSymbol { kind, .. } => ErrorTip::Suggestion(format!(
                "Only one symbol may be of kind {:?}",
                kind
            )),
            ErrorImpl::InvalidAcceptSymbol { symbol, kind } => ErrorTip::Suggestion(format!(
                "Symbol `{}` of kind {:?} can never be matched from input",
                symbol, kind
            )),
            ErrorImpl::UnknownSymbol { .. }
            | ErrorImpl::UnknownCharSet { .. }
            | ErrorImpl::UnknownDfaState { .. } => ErrorTip::Suggestion(String::from(
                "Use the ids returned by the builder when wiring the grammar",
            )),
            ErrorImpl::EmptyDfa => ErrorTip::None,
            ErrorImpl::EmptyCharRange { .. } => ErrorTip::None,
            ErrorImpl::NondeterministicTransition { state, .. } => ErrorTip::Suggestion(format!(
                "The character sets on the edges of state {} must be disjoint",
                state
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at {}", self.internal_error, position),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, None)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("invalid argument: {argument} is absent")]
    InvalidArgument { argument: &'static str },
    #[error("reading the character source failed")]
    Io(#[source] std::io::Error),
    #[error("invalid tokenizer configuration")]
    Config(#[source] serde_json::Error),
    #[error("grammar has no symbol of kind {kind:?}")]
    MissingSpecialSymbol { kind: SymbolKind },
    #[error("grammar has more than one symbol of kind {kind:?}: {first:?} and {second:?}")]
    DuplicateSpecialSymbol {
        kind: SymbolKind,
        first: String,
        second: String,
    },
    #[error("DFA state accepts {symbol:?} of kind {kind:?}")]
    InvalidAcceptSymbol { symbol: String, kind: SymbolKind },
    #[error("unknown symbol id {id}")]
    UnknownSymbol { id: usize },
    #[error("unknown character set id {id}")]
    UnknownCharSet { id: usize },
    #[error("unknown DFA state {state}")]
    UnknownDfaState { state: usize },
    #[error("grammar has no DFA states")]
    EmptyDfa,
    #[error("empty character range {start:?}..={end:?}")]
    EmptyCharRange { start: char, end: char },
    #[error("DFA state {state} has more than one edge for {character:?}")]
    NondeterministicTransition { state: usize, character: char },
}
