use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    grammar::{
        grammar::CompiledGrammar,
        symbols::{Symbol, SymbolKind},
    },
    Position, MK_TOKEN,
};

use super::{
    config::{CommentText, TokenizerConfig},
    source::{CharSource, StringSource},
    tokens::{ParseMessage, Token},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenizerState {
    Scanning,
    /// `End` has been produced; every further scan yields `End` again.
    Exhausted,
}

/// The scanning interface a parsing layer pulls tokens through.
pub trait Tokenize<'g> {
    fn next_token(&mut self) -> Result<(ParseMessage, Token<'g>), Error>;

    fn current_position(&self) -> Position;
}

/// Table-driven scanner over a character source.
///
/// Each call to `next_token` performs one longest-match walk of the grammar's
/// DFA and returns exactly one lexical event. Characters read past the best
/// match stay in `lookahead` and are scanned again by the next call.
pub struct Tokenizer<'g, S> {
    /// The character source, owned until the tokenizer is dropped or closed
    source: S,
    /// The grammar whose DFA drives scanning
    grammar: &'g CompiledGrammar,
    config: TokenizerConfig,
    /// Characters read from the source but not yet consumed
    lookahead: VecDeque<char>,
    /// The source has reported exhaustion
    source_done: bool,
    /// Position of the next unconsumed character
    position: Position,
    /// Last consumed character, for `\r\n` handling
    previous: Option<char>,
    state: TokenizerState,
    /// Comment interrupted by a read failure
    comment: Option<OpenComment<'g>>,
    /// The iterator yielded an error and is fused
    failed: bool,
}

/// A comment whose opening marker has been consumed but whose body is not
/// finished yet.
#[derive(Debug)]
struct OpenComment<'g> {
    symbol: &'g Symbol,
    text: String,
    start: Position,
    depth: usize,
}

impl<'g, S: CharSource> Tokenizer<'g, S> {
    pub fn new(source: Option<S>, grammar: Option<&'g CompiledGrammar>) -> Result<Self, Error> {
        let source = source.ok_or_else(|| Error::invalid_argument("source"))?;
        let grammar = grammar.ok_or_else(|| Error::invalid_argument("grammar"))?;

        Ok(Tokenizer {
            source,
            grammar,
            config: TokenizerConfig::default(),
            lookahead: VecDeque::new(),
            source_done: false,
            position: Position::start(),
            previous: None,
            state: TokenizerState::Scanning,
            comment: None,
            failed: false,
        })
    }

    pub fn with_config(mut self, config: TokenizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn grammar(&self) -> &'g CompiledGrammar {
        self.grammar
    }

    pub fn current_position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> TokenizerState {
        self.state
    }

    /// Gives the source back. Characters already buffered for lookahead are
    /// not returned to it.
    pub fn close(self) -> S {
        self.source
    }

    pub fn next_token(&mut self) -> Result<(ParseMessage, Token<'g>), Error> {
        let (message, token) = match self.comment.take() {
            Some(comment) => self.finish_comment(comment)?,
            None => {
                if self.state == TokenizerState::Exhausted || self.peek(0)?.is_none() {
                    return Ok(self.end());
                }
                self.scan()?
            }
        };

        trace!(
            kind = %message,
            symbol = %token.symbol.name,
            index = token.position.index,
            length = self.position.index - token.position.index,
            "token scanned"
        );

        Ok((message, token))
    }

    fn scan(&mut self) -> Result<(ParseMessage, Token<'g>), Error> {
        let start = self.position;

        let Some((length, symbol)) = self.longest_match()? else {
            let text = self.consume(1);
            debug!(
                character = ?text,
                index = start.index,
                line = start.line,
                column = start.column,
                "lexical error"
            );
            return Ok((
                ParseMessage::LexicalError,
                MK_TOKEN!(self.grammar.error_symbol(), text, start),
            ));
        };

        let text = self.consume(length);
        match symbol.kind {
            SymbolKind::CommentLineStart | SymbolKind::CommentBlockStart => {
                let text = match self.config.comment_text {
                    CommentText::WithDelimiters => text,
                    CommentText::ContentOnly => String::new(),
                };
                self.finish_comment(OpenComment {
                    symbol,
                    text,
                    start,
                    depth: 1,
                })
            }
            // A stray end marker is an ordinary token. Nonterminal, Error
            // and End are rejected as accept symbols by the builder.
            SymbolKind::Terminal
            | SymbolKind::WhiteSpace
            | SymbolKind::CommentBlockEnd
            | SymbolKind::Nonterminal
            | SymbolKind::Error
            | SymbolKind::End => Ok((ParseMessage::TokenRead, MK_TOKEN!(symbol, text, start))),
        }
    }

    fn end(&mut self) -> (ParseMessage, Token<'g>) {
        if self.state == TokenizerState::Scanning {
            trace!(index = self.position.index, "source exhausted");
            self.state = TokenizerState::Exhausted;
        }

        (
            ParseMessage::End,
            MK_TOKEN!(self.grammar.end_symbol(), String::new(), self.position),
        )
    }

    /// Walks the DFA from the initial state over the unconsumed input and
    /// returns the length and symbol of the longest accepted prefix. Nothing
    /// is consumed.
    fn longest_match(&mut self) -> Result<Option<(usize, &'g Symbol)>, Error> {
        let grammar = self.grammar;
        let mut state = grammar.dfa_initial_state();
        let mut length = 0;
        let mut best = None;

        while let Some(ch) = self.peek(length)? {
            match grammar.dfa_next(state, ch) {
                Some(next) => {
                    state = next;
                    length += 1;
                    if let Some(symbol) = grammar.dfa_accept(state) {
                        best = Some((length, symbol));
                    }
                }
                None => break,
            }
        }

        Ok(best)
    }

    /// Reads the rest of a comment whose opening marker is consumed. On a read
    /// failure the comment is parked so the next call picks it up where it
    /// stopped.
    fn finish_comment(
        &mut self,
        mut comment: OpenComment<'g>,
    ) -> Result<(ParseMessage, Token<'g>), Error> {
        let scanned = match comment.symbol.kind {
            SymbolKind::CommentLineStart => self
                .line_comment(&mut comment)
                .map(|()| ParseMessage::CommentLineRead),
            _ => self
                .block_comment(&mut comment)
                .map(|()| ParseMessage::CommentBlockRead),
        };

        match scanned {
            Ok(message) => Ok((
                message,
                MK_TOKEN!(comment.symbol, comment.text, comment.start),
            )),
            Err(e) => {
                self.comment = Some(comment);
                Err(e)
            }
        }
    }

    fn line_comment(&mut self, comment: &mut OpenComment<'g>) -> Result<(), Error> {
        while let Some(ch) = self.peek(0)? {
            if ch == '\r' || ch == '\n' {
                break;
            }
            self.consume_into(1, &mut comment.text);
        }

        Ok(())
    }

    fn block_comment(&mut self, comment: &mut OpenComment<'g>) -> Result<(), Error> {
        loop {
            if self.peek(0)?.is_none() {
                debug!(
                    index = comment.start.index,
                    line = comment.start.line,
                    column = comment.start.column,
                    "unterminated block comment"
                );
                return Ok(());
            }

            match self.longest_match()? {
                Some((length, found)) if found.kind == SymbolKind::CommentBlockEnd => {
                    comment.depth -= 1;
                    if comment.depth == 0 {
                        let end_marker = self.consume(length);
                        if self.config.comment_text == CommentText::WithDelimiters {
                            comment.text.push_str(&end_marker);
                        }
                        return Ok(());
                    }
                    self.consume_into(length, &mut comment.text);
                }
                Some((length, found))
                    if found.kind == SymbolKind::CommentBlockStart
                        && self.config.nested_block_comments =>
                {
                    comment.depth += 1;
                    self.consume_into(length, &mut comment.text);
                }
                // Skip a single character so markers glued to other text are still found.
                _ => self.consume_into(1, &mut comment.text),
            }
        }
    }

    fn peek(&mut self, offset: usize) -> Result<Option<char>, Error> {
        while self.lookahead.len() <= offset && !self.source_done {
            match self.source.read_char() {
                Ok(Some(ch)) => self.lookahead.push_back(ch),
                Ok(None) => self.source_done = true,
                Err(e) => return Err(Error::new(ErrorImpl::Io(e), Some(self.position))),
            }
        }

        Ok(self.lookahead.get(offset).copied())
    }

    fn consume(&mut self, count: usize) -> String {
        let mut text = String::with_capacity(count);
        self.consume_into(count, &mut text);
        text
    }

    fn consume_into(&mut self, count: usize, text: &mut String) {
        for _ in 0..count {
            let Some(ch) = self.lookahead.pop_front() else {
                break;
            };
            self.position.advance(ch, self.previous);
            self.previous = Some(ch);
            text.push(ch);
        }
    }
}

impl<'g, S: CharSource> Tokenize<'g> for Tokenizer<'g, S> {
    fn next_token(&mut self) -> Result<(ParseMessage, Token<'g>), Error> {
        Tokenizer::next_token(self)
    }

    fn current_position(&self) -> Position {
        Tokenizer::current_position(self)
    }
}

/// Yields scan results up to and including the first `End`, or up to the
/// first error. Call `next_token` directly to retry after a failed read.
impl<'g, S: CharSource> Iterator for Tokenizer<'g, S> {
    type Item = Result<(ParseMessage, Token<'g>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.state == TokenizerState::Exhausted {
            return None;
        }
        let result = Tokenizer::next_token(self);
        self.failed = result.is_err();
        Some(result)
    }
}

/// Scans all of `source`, the final element being the `End` result.
pub fn tokenize<'g>(
    source: &str,
    grammar: &'g CompiledGrammar,
) -> Result<Vec<(ParseMessage, Token<'g>)>, Error> {
    Tokenizer::new(Some(StringSource::from(source)), Some(grammar))?.collect()
}
