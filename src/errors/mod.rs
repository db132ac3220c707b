//! Error types and error handling for the tokenizer.
//!
//! This module defines the fatal errors of the crate. It includes:
//!
//! - Construction errors (absent source or grammar)
//! - Grammar validation errors raised by `GrammarBuilder::build`
//! - I/O failures of the character source, passed through unchanged
//! - Malformed tokenizer configuration
//!
//! Lexical errors are not part of this taxonomy: they are reported as
//! `ParseMessage::LexicalError` values and scanning carries on.

pub mod errors;
