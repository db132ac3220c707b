use std::fmt::Display;

use crate::{
    grammar::symbols::{Symbol, SymbolKind},
    Position,
};

/// Outcome of one scan step.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ParseMessage {
    TokenRead,
    CommentLineRead,
    CommentBlockRead,
    LexicalError,
    End,
}

impl Display for ParseMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A scanned token. The symbol is borrowed from the grammar; the text is
/// owned by the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'g> {
    pub symbol: &'g Symbol,
    pub text: String,
    pub position: Position,
}

impl<'g> Token<'g> {
    pub fn kind(&self) -> SymbolKind {
        self.symbol.kind
    }

    pub fn name(&self) -> &'g str {
        let symbol: &'g Symbol = self.symbol;
        &symbol.name
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.symbol, self.text, self.position)
    }
}
