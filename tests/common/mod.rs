//! Shared fixtures for the integration tests.
//!
//! `EXPRESSION_GRAMMAR` is the compiled form of a small arithmetic grammar:
//! integers, floats with optional exponent, `+ - * / ( )`, whitespace,
//! `--` line comments and `/* */` block comments.

use lazy_static::lazy_static;
use tablelex::{CharSet, CompiledGrammar, GrammarBuilder, SymbolKind};

lazy_static! {
    pub static ref EXPRESSION_GRAMMAR: CompiledGrammar = expression_grammar();
}

fn expression_grammar() -> CompiledGrammar {
    let mut b = GrammarBuilder::new("Expression");

    b.symbol("EOF", SymbolKind::End);
    b.symbol("Error", SymbolKind::Error);
    let whitespace = b.symbol("Whitespace", SymbolKind::WhiteSpace);
    let comment_line = b.symbol("Comment Line", SymbolKind::CommentLineStart);
    let comment_start = b.symbol("Comment Start", SymbolKind::CommentBlockStart);
    let comment_end = b.symbol("Comment End", SymbolKind::CommentBlockEnd);
    let minus = b.symbol("-", SymbolKind::Terminal);
    let open = b.symbol("(", SymbolKind::Terminal);
    let close = b.symbol(")", SymbolKind::Terminal);
    let times = b.symbol("*", SymbolKind::Terminal);
    let divide = b.symbol("/", SymbolKind::Terminal);
    let plus = b.symbol("+", SymbolKind::Terminal);
    let float = b.symbol("Float", SymbolKind::Terminal);
    let integer = b.symbol("Integer", SymbolKind::Terminal);
    b.symbol("Expression", SymbolKind::Nonterminal);
    b.symbol("Mult Exp", SymbolKind::Nonterminal);
    b.symbol("Negate Exp", SymbolKind::Nonterminal);
    b.symbol("Value", SymbolKind::Nonterminal);

    let cs_whitespace = b.char_set(CharSet::from_chars(" \t\r\n"));
    let cs_minus = b.char_set(CharSet::from_chars("-"));
    let cs_open = b.char_set(CharSet::from_chars("("));
    let cs_close = b.char_set(CharSet::from_chars(")"));
    let cs_times = b.char_set(CharSet::from_chars("*"));
    let cs_divide = b.char_set(CharSet::from_chars("/"));
    let cs_plus = b.char_set(CharSet::from_chars("+"));
    let cs_sign = b.char_set(CharSet::from_chars("+-"));
    let cs_digit = b.char_set(CharSet::new(['0'..='9']).unwrap());
    let cs_dot = b.char_set(CharSet::from_chars("."));
    let cs_exponent = b.char_set(CharSet::from_chars("eE"));

    let start = b.state();
    let s_whitespace = b.accepting_state(whitespace);
    let s_minus = b.accepting_state(minus);
    let s_comment_line = b.accepting_state(comment_line);
    let s_open = b.accepting_state(open);
    let s_close = b.accepting_state(close);
    let s_times = b.accepting_state(times);
    let s_comment_end = b.accepting_state(comment_end);
    let s_divide = b.accepting_state(divide);
    let s_comment_start = b.accepting_state(comment_start);
    let s_plus = b.accepting_state(plus);
    let s_integer = b.accepting_state(integer);
    let s_dot = b.state();
    let s_fraction = b.accepting_state(float);
    let s_exponent = b.state();
    let s_exponent_sign = b.state();
    let s_exponent_digits = b.accepting_state(float);

    b.initial_state(start)
        .edge(start, cs_whitespace, s_whitespace)
        .edge(s_whitespace, cs_whitespace, s_whitespace)
        .edge(start, cs_minus, s_minus)
        .edge(s_minus, cs_minus, s_comment_line)
        .edge(start, cs_open, s_open)
        .edge(start, cs_close, s_close)
        .edge(start, cs_times, s_times)
        .edge(s_times, cs_divide, s_comment_end)
        .edge(start, cs_divide, s_divide)
        .edge(s_divide, cs_times, s_comment_start)
        .edge(start, cs_plus, s_plus)
        .edge(start, cs_digit, s_integer)
        .edge(start, cs_dot, s_dot)
        .edge(s_integer, cs_digit, s_integer)
        .edge(s_integer, cs_dot, s_dot)
        .edge(s_dot, cs_digit, s_fraction)
        .edge(s_fraction, cs_digit, s_fraction)
        .edge(s_fraction, cs_exponent, s_exponent)
        .edge(s_exponent, cs_sign, s_exponent_sign)
        .edge(s_exponent, cs_digit, s_exponent_digits)
        .edge(s_exponent_sign, cs_digit, s_exponent_digits)
        .edge(s_exponent_digits, cs_digit, s_exponent_digits);

    b.build().unwrap()
}

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
