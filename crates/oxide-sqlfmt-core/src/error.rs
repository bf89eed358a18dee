//! Error types for the formatter.

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Invalid dialect or render configuration, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A vocabulary list that must not be empty is empty.
    #[error("Vocabulary list '{0}' must not be empty")]
    EmptyVocabulary(&'static str),

    /// A vocabulary entry is blank or contains non-word characters.
    #[error("Malformed entry '{entry}' in '{list}'")]
    MalformedVocabulary {
        /// The vocabulary list holding the entry.
        list: &'static str,
        /// The offending entry.
        entry: String,
    },

    /// The parenthesis pairs are missing, blank or duplicated.
    #[error("Invalid parenthesis pairs: {0}")]
    InvalidParens(String),

    /// A parenthesis marker is also a quote marker.
    #[error("Marker '{0}' is used both as a parenthesis and as a quote")]
    ConflictingMarkers(String),

    /// A variable pattern or a derived rule failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// The regex compiler's message.
        message: String,
    },

    /// The statement delimiter is blank or looks like a word.
    #[error("Invalid statement delimiter '{0}'")]
    InvalidDelimiter(String),

    /// A comment, parameter or operator marker is blank or malformed.
    #[error("Invalid marker '{0}'")]
    InvalidMarker(String),

    /// Indent width outside 1..=8.
    #[error("Indent width must be between 1 and 8, got {0}")]
    InvalidIndent(u8),

    /// Line width of zero.
    #[error("Line width must be greater than zero")]
    InvalidLineWidth,

    /// A string setting has no matching value.
    #[error("Unknown value '{value}' for option '{option}'")]
    UnknownOptionValue {
        /// The option name.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A serialized options document could not be read.
    #[error("Invalid options document: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

/// Errors that can occur while formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The input contains text no token class matches.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// The token stream is structurally inconsistent.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
