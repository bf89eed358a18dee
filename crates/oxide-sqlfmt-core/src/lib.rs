//! # oxide-sqlfmt-core
//!
//! A dialect-configurable SQL formatter.
//!
//! Formatting runs in three stages:
//! - a tokenizer driven by an ordered table of per-class rules built from a
//!   [`DialectConfig`],
//! - a recursive descent parser grouping tokens into statements, clauses,
//!   parentheses, function calls, CASE, BETWEEN and LIMIT nodes,
//! - a layout engine rendering the tree with an indent unit, a keyword case
//!   and a line width hint.
//!
//! ```rust
//! use oxide_sqlfmt_core::{FormatOptions, GenericDialect, KeywordCase, SqlFormatter};
//!
//! let options = FormatOptions::default()
//!     .with_keyword_case(KeywordCase::Lower)
//!     .with_line_width(20);
//! let formatter = SqlFormatter::from_dialect(&GenericDialect, options).unwrap();
//!
//! let sql = formatter
//!     .format("SELECT id, name, email FROM users")
//!     .unwrap();
//! assert_eq!(sql, "select\n  id,\n  name,\n  email\nfrom users");
//! ```
//!
//! Formatting is idempotent: source whitespace never influences the layout,
//! so formatting the output again returns it unchanged.

pub mod ast;
pub mod dialect;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod lexer;
pub mod parser;

pub use ast::{AstNode, Statement};
pub use dialect::{Dialect, DialectConfig, GenericDialect};
pub use error::{ConfigError, FormatError, Result};
pub use formatter::{format, SqlFormatter};
pub use layout::{FormatOptions, Indent, KeywordCase};
pub use lexer::{LexError, Token, TokenKind, Tokenizer};
pub use parser::{ParseError, Parser};
