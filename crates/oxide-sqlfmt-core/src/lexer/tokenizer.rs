//! SQL tokenizer driven by a dialect's rule table.

use tracing::{debug, trace};

use super::rules::{RuleMatch, RuleTable};
use super::{LexError, Span, Token, TokenKind};
use crate::dialect::DialectConfig;
use crate::error::ConfigError;

/// Splits SQL text into tokens for one dialect.
///
/// The rule table is compiled once; a `Tokenizer` is immutable and can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: RuleTable,
}

impl Tokenizer {
    /// Compiles the rule table for `config`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn new(config: &DialectConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: RuleTable::new(config)?,
        })
    }

    /// Returns the compiled rule table.
    #[must_use]
    pub const fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Tokenizes `input`.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` at the first position no token class matches.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexError> {
        let tokens = Lexer::new(&self.rules, input).run()?;
        debug!(tokens = tokens.len(), bytes = input.len(), "Tokenized input");
        Ok(tokens)
    }
}

/// Cursor over one input.
struct Lexer<'t, 'a> {
    rules: &'t RuleTable,
    input: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'t, 'a> Lexer<'t, 'a> {
    const fn new(rules: &'t RuleTable, input: &'a str) -> Self {
        Self {
            rules,
            input,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes whitespace and returns it.
    fn skip_whitespace(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    fn after_dot(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|prev| prev.is_value(TokenKind::Operator, "."))
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            let whitespace = self.skip_whitespace();
            if self.pos == self.input.len() {
                return Ok(self.tokens);
            }

            let m = self
                .rules
                .match_at(self.rest(), self.after_dot())
                .ok_or_else(|| LexError::new(self.input, self.pos))?;
            let token = self.make_token(m, whitespace);
            trace!(kind = %token.kind, text = %token.text, offset = self.pos, "Matched token");

            self.pos = token.span.end;
            self.tokens.push(token);
        }
    }

    fn make_token(&self, m: RuleMatch, whitespace: &str) -> Token {
        let span = Span::at(self.pos, m.len);
        let text = &self.input[span.start..span.end];
        let token = Token::new(m.kind, text, span)
            .with_whitespace(whitespace)
            .with_key(m.key);
        match m.value {
            Some(value) => token.with_value(value),
            None => token,
        }
    }
}
