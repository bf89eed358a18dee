//! The text to text pipeline.

use crate::ast::Statement;
use crate::dialect::{Dialect, DialectConfig};
use crate::error::{ConfigError, Result};
use crate::layout::{FormatOptions, Formatter};
use crate::lexer::{Token, Tokenizer};
use crate::parser::Parser;

/// A reusable formatter for one dialect and one set of options.
///
/// All configuration is checked when the formatter is built; formatting
/// only fails on the input text itself. The formatter is immutable and can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct SqlFormatter {
    tokenizer: Tokenizer,
    parser: Parser,
    formatter: Formatter,
}

impl SqlFormatter {
    /// Builds a formatter from a dialect configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the dialect or the options are invalid.
    pub fn new(
        config: &DialectConfig,
        options: FormatOptions,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            tokenizer: Tokenizer::new(config)?,
            parser: Parser::new(config),
            formatter: Formatter::new(options)?,
        })
    }

    /// Builds a formatter for a named dialect.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the dialect or the options are invalid.
    pub fn from_dialect(
        dialect: &dyn Dialect,
        options: FormatOptions,
    ) -> std::result::Result<Self, ConfigError> {
        Self::new(&dialect.config(), options)
    }

    /// Returns the render options.
    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        self.formatter.options()
    }

    /// Tokenizes `sql`.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if some input matches no token class.
    pub fn tokenize(&self, sql: &str) -> Result<Vec<Token>> {
        Ok(self.tokenizer.tokenize(sql)?)
    }

    /// Tokenizes and parses `sql`.
    ///
    /// # Errors
    ///
    /// Returns a lexical or structural error.
    pub fn parse(&self, sql: &str) -> Result<Vec<Statement>> {
        let tokens = self.tokenizer.tokenize(sql)?;
        Ok(self.parser.parse(tokens)?)
    }

    /// Formats `sql`.
    ///
    /// # Errors
    ///
    /// Returns a lexical or structural error; no partial output is produced.
    pub fn format(&self, sql: &str) -> Result<String> {
        let statements = self.parse(sql)?;
        Ok(self.formatter.format(&statements))
    }
}

/// Formats `sql` in one call.
///
/// # Example
///
/// ```
/// use oxide_sqlfmt_core::{format, FormatOptions, GenericDialect};
///
/// let sql = format("select a, b from t where x = 1", &GenericDialect, FormatOptions::default())
///     .unwrap();
/// assert_eq!(sql, "SELECT a, b\nFROM t\nWHERE x = 1");
/// ```
///
/// # Errors
///
/// Returns a `FormatError` for invalid configuration or input.
pub fn format(sql: &str, dialect: &dyn Dialect, options: FormatOptions) -> Result<String> {
    SqlFormatter::from_dialect(dialect, options)?.format(sql)
}
