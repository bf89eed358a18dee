//! SQL tokenizer.
//!
//! Turns raw text into a flat token stream using the rule table compiled
//! from a dialect configuration. Whitespace is not a token; it is kept on
//! the token that follows it.

mod error;
mod reserved;
mod rules;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, SNIPPET_CHARS};
pub use reserved::ReservedWords;
pub use rules::{RuleMatch, RuleTable, MATCH_ORDER};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
