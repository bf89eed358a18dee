//! Parser error types.

use crate::lexer::{Span, Token};

/// A structural inconsistency in the token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An opening marker without its closing marker.
    #[error("Unmatched '{}' at {}", .open.text, .open.span)]
    UnmatchedOpenParen {
        /// The opening marker.
        open: Token,
    },

    /// A closing marker that belongs to a different pair.
    #[error(
        "Expected '{expected}' to close '{}' but found '{}' at {}",
        .open.text, .found.text, .found.span
    )]
    MismatchedParen {
        /// The opening marker.
        open: Token,
        /// The closing marker that would match it.
        expected: String,
        /// The closing marker found instead.
        found: Token,
    },

    /// A closing marker with nothing to close.
    #[error("Unexpected '{}' at {}", .close.text, .close.span)]
    UnmatchedCloseParen {
        /// The stray closing marker.
        close: Token,
    },

    /// A CASE without END.
    #[error("'{}' at {} has no matching END", .case.text, .case.span)]
    UnterminatedCase {
        /// The CASE token.
        case: Token,
    },

    /// A BETWEEN with an empty bound, or whose AND a nested predicate took.
    #[error("Malformed BETWEEN at {}: {reason}", .between.span)]
    MalformedBetween {
        /// The BETWEEN token.
        between: Token,
        /// What is missing.
        reason: &'static str,
    },

    /// A LIMIT without a row count.
    #[error("Malformed LIMIT at {}: {reason}", .limit.span)]
    MalformedLimit {
        /// The LIMIT token.
        limit: Token,
        /// What is missing.
        reason: &'static str,
    },

    /// Constructs nested beyond the parser's limit.
    #[error("Nesting deeper than {limit} levels at {}", .token.span)]
    NestingTooDeep {
        /// The token opening the level that exceeded the limit.
        token: Token,
        /// The configured limit.
        limit: usize,
    },
}

impl ParseError {
    /// Returns the token the error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnmatchedOpenParen { open } => open,
            Self::MismatchedParen { found, .. } => found,
            Self::UnmatchedCloseParen { close } => close,
            Self::UnterminatedCase { case } => case,
            Self::MalformedBetween { between, .. } => between,
            Self::MalformedLimit { limit, .. } => limit,
            Self::NestingTooDeep { token, .. } => token,
        }
    }

    /// Returns the location of the offending token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.token().span
    }
}
