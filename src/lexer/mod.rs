//! Lexical analysis module.
//!
//! This module contains the table-driven tokenizer that converts a character
//! stream into classified tokens by walking the DFA of a compiled grammar. It
//! handles:
//!
//! - Longest-match scanning with rewind past the best accepting state
//! - Line and block comment sub-scanning
//! - Position tracking across `\n`, `\r` and `\r\n` line terminators
//! - Recovery from lexical errors by skipping a single character

pub mod config;
pub mod lexer;
pub mod source;
pub mod tokens;
