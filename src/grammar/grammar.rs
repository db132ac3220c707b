//! The compiled grammar and the builder that validates it.
//!
//! `GrammarBuilder::build` is the only way to obtain a `CompiledGrammar`, so
//! every table the tokenizer walks is known to be well formed: all ids
//! resolve, the DFA is deterministic, and the `End` and `Error` symbols exist
//! exactly once.

use std::collections::HashMap;

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    charset::{CharSet, CharSetId},
    dfa::{DfaEdge, DfaState, DfaStateId},
    symbols::{Symbol, SymbolId, SymbolKind},
};

#[derive(Debug, Clone)]
pub struct CompiledGrammar {
    name: String,
    symbols: Vec<Symbol>,
    char_sets: Vec<CharSet>,
    dfa_states: Vec<DfaState>,
    dfa_initial_state: DfaStateId,
    end_symbol: SymbolId,
    error_symbol: SymbolId,
    names: HashMap<String, SymbolId>,
}

impl CompiledGrammar {
    pub fn builder(name: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn symbol_by_name(&self, name: &str) -> Option<&Symbol> {
        self.names.get(name).map(|id| &self.symbols[*id])
    }

    pub fn symbols_of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> + '_ {
        self.symbols.iter().filter(move |symbol| symbol.kind == kind)
    }

    pub fn end_symbol(&self) -> &Symbol {
        &self.symbols[self.end_symbol]
    }

    pub fn error_symbol(&self) -> &Symbol {
        &self.symbols[self.error_symbol]
    }

    pub fn char_set(&self, id: CharSetId) -> Option<&CharSet> {
        self.char_sets.get(id)
    }

    pub fn dfa_initial_state(&self) -> DfaStateId {
        self.dfa_initial_state
    }

    pub fn dfa_state(&self, id: DfaStateId) -> Option<&DfaState> {
        self.dfa_states.get(id)
    }

    pub fn dfa_states(&self) -> &[DfaState] {
        &self.dfa_states
    }

    /// Follows the edge of `state` whose character set contains `ch`.
    pub fn dfa_next(&self, state: DfaStateId, ch: char) -> Option<DfaStateId> {
        self.dfa_states
            .get(state)?
            .edges
            .iter()
            .find(|edge| self.char_sets[edge.char_set].contains(ch))
            .map(|edge| edge.target)
    }

    /// The symbol accepted by `state`, if it is an accepting state.
    pub fn dfa_accept(&self, state: DfaStateId) -> Option<&Symbol> {
        let accept = self.dfa_states.get(state)?.accept?;
        self.symbols.get(accept)
    }
}

/// Collects symbols, character sets and DFA states, handing out the ids that
/// later calls use to wire them together.
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    name: String,
    symbols: Vec<Symbol>,
    char_sets: Vec<CharSet>,
    dfa_states: Vec<DfaState>,
    edges: Vec<(DfaStateId, DfaEdge)>,
    dfa_initial_state: Option<DfaStateId>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        GrammarBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn symbol(&mut self, name: impl Into<String>, kind: SymbolKind) -> SymbolId {
        let id = self.symbols.len();
        self.symbols.push(Symbol {
            id,
            name: name.into(),
            kind,
        });
        id
    }

    pub fn char_set(&mut self, char_set: CharSet) -> CharSetId {
        self.char_sets.push(char_set);
        self.char_sets.len() - 1
    }

    pub fn state(&mut self) -> DfaStateId {
        self.push_state(None)
    }

    pub fn accepting_state(&mut self, symbol: SymbolId) -> DfaStateId {
        self.push_state(Some(symbol))
    }

    /// Adds an edge. Ids are checked in `build`, so wiring order does not matter.
    pub fn edge(&mut self, from: DfaStateId, char_set: CharSetId, to: DfaStateId) -> &mut Self {
        self.edges.push((
            from,
            DfaEdge {
                char_set,
                target: to,
            },
        ));
        self
    }

    pub fn initial_state(&mut self, state: DfaStateId) -> &mut Self {
        self.dfa_initial_state = Some(state);
        self
    }

    pub fn build(mut self) -> Result<CompiledGrammar, Error> {
        let end_symbol = self.special_symbol(SymbolKind::End)?;
        let error_symbol = self.special_symbol(SymbolKind::Error)?;

        if self.dfa_states.is_empty() {
            return Err(ErrorImpl::EmptyDfa.into());
        }

        for (from, edge) in std::mem::take(&mut self.edges) {
            let state = self
                .dfa_states
                .get_mut(from)
                .ok_or(ErrorImpl::UnknownDfaState { state: from })?;
            state.edges.push(edge);
        }

        for state in &self.dfa_states {
            self.validate_state(state)?;
        }

        let dfa_initial_state = self.dfa_initial_state.unwrap_or(0);
        if dfa_initial_state >= self.dfa_states.len() {
            return Err(ErrorImpl::UnknownDfaState {
                state: dfa_initial_state,
            }
            .into());
        }

        let mut names = HashMap::new();
        for symbol in &self.symbols {
            names.entry(symbol.name.clone()).or_insert(symbol.id);
        }

        Ok(CompiledGrammar {
            name: self.name,
            symbols: self.symbols,
            char_sets: self.char_sets,
            dfa_states: self.dfa_states,
            dfa_initial_state,
            end_symbol,
            error_symbol,
            names,
        })
    }

    fn push_state(&mut self, accept: Option<SymbolId>) -> DfaStateId {
        let id = self.dfa_states.len();
        self.dfa_states.push(DfaState {
            id,
            accept,
            edges: vec![],
        });
        id
    }

    fn special_symbol(&self, kind: SymbolKind) -> Result<SymbolId, Error> {
        let mut found = self.symbols.iter().filter(|symbol| symbol.kind == kind);

        let first = found
            .next()
            .ok_or(ErrorImpl::MissingSpecialSymbol { kind })?;

        if let Some(second) = found.next() {
            return Err(ErrorImpl::DuplicateSpecialSymbol {
                kind,
                first: first.name.clone(),
                second: second.name.clone(),
            }
            .into());
        }

        Ok(first.id)
    }

    fn validate_state(&self, state: &DfaState) -> Result<(), Error> {
        if let Some(accept) = state.accept {
            let symbol = self
                .symbols
                .get(accept)
                .ok_or(ErrorImpl::UnknownSymbol { id: accept })?;

            if !symbol.kind.is_lexical() {
                return Err(ErrorImpl::InvalidAcceptSymbol {
                    symbol: symbol.name.clone(),
                    kind: symbol.kind,
                }
                .into());
            }
        }

        let mut ranges = Vec::new();
        for edge in &state.edges {
            if edge.target >= self.dfa_states.len() {
                return Err(ErrorImpl::UnknownDfaState { state: edge.target }.into());
            }

            let char_set = self
                .char_sets
                .get(edge.char_set)
                .ok_or(ErrorImpl::UnknownCharSet { id: edge.char_set })?;
            ranges.extend(char_set.ranges().iter().cloned());
        }

        // Edges of one state must not share a character.
        ranges.sort_by_key(|range| *range.start());
        for pair in ranges.windows(2) {
            if pair[1].start() <= pair[0].end() {
                return Err(ErrorImpl::NondeterministicTransition {
                    state: state.id,
                    character: *pair[1].start(),
                }
                .into());
            }
        }

        Ok(())
    }
}
