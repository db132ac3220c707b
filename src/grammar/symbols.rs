use std::fmt::Display;

pub type SymbolId = usize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolKind {
    Nonterminal,
    Terminal,
    WhiteSpace,
    CommentLineStart,
    CommentBlockStart,
    CommentBlockEnd,
    Error,
    End,
}

impl SymbolKind {
    /// Kinds that a DFA state may accept. `End` and `Error` are synthesized
    /// by the tokenizer and nonterminals only exist for the parser.
    pub fn is_lexical(&self) -> bool {
        !matches!(
            self,
            SymbolKind::Nonterminal | SymbolKind::Error | SymbolKind::End
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub kind: SymbolKind,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SymbolKind::Nonterminal => write!(f, "<{}>", self.name),
            SymbolKind::Terminal => write!(f, "{}", self.name),
            _ => write!(f, "({})", self.name),
        }
    }
}
