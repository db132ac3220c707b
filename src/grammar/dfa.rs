use super::{charset::CharSetId, symbols::SymbolId};

pub type DfaStateId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfaEdge {
    pub char_set: CharSetId,
    pub target: DfaStateId,
}

/// One state of the lexical DFA. Edges point into the grammar's state arena
/// and label themselves with a character set id rather than owning the set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DfaState {
    pub id: DfaStateId,
    pub accept: Option<SymbolId>,
    pub edges: Vec<DfaEdge>,
}

impl DfaState {
    pub fn is_accepting(&self) -> bool {
        self.accept.is_some()
    }
}
