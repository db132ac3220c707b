#![allow(clippy::module_inception)]

use std::{cmp::Ordering, fmt::Display};

pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod macros;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use grammar::{
    charset::CharSet,
    dfa::{DfaEdge, DfaState},
    grammar::{CompiledGrammar, GrammarBuilder},
    symbols::{Symbol, SymbolKind},
};
pub use lexer::{
    config::{CommentText, TokenizerConfig},
    lexer::{tokenize, Tokenize, Tokenizer, TokenizerState},
    source::{CharSource, ReaderSource, StringSource},
    tokens::{ParseMessage, Token},
};

/// A location in the character stream.
///
/// `index` counts characters consumed since the start of the stream. `line`
/// and `column` are 1-based; a `\r\n` pair advances `index` twice but is a
/// single newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves past `ch`. `previous` is the character consumed just before it,
    /// needed so that the `\n` of a `\r\n` pair does not count as a second line.
    pub fn advance(&mut self, ch: char, previous: Option<char>) {
        self.index += 1;

        match ch {
            '\r' => {
                self.line += 1;
                self.column = 1;
            }
            '\n' if previous == Some('\r') => {}
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then(self.line.cmp(&other.line))
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} (index {})", self.line, self.column, self.index)
    }
}
