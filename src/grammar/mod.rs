//! Compiled grammar tables consumed by the tokenizer.
//!
//! A compiled grammar is an immutable, precomputed artifact. This module
//! holds its in-memory form:
//!
//! - The symbol catalog, each symbol classified by a `SymbolKind`
//! - Character sets labelling DFA edges
//! - DFA states stored in an arena and addressed by index
//! - A validating builder that produces a `CompiledGrammar`
//!
//! Persisting and loading grammar files is left to the grammar compiler.

pub mod charset;
pub mod dfa;
pub mod grammar;
pub mod symbols;
