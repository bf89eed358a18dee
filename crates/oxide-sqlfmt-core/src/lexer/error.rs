//! Lexical error type.

use super::Span;

/// Maximum number of characters of remaining input quoted in a `LexError`.
pub const SNIPPET_CHARS: usize = 32;

/// No token class matches the input at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unexpected \"{snippet}\" at offset {offset}")]
pub struct LexError {
    /// Byte offset of the unmatched input.
    pub offset: usize,
    /// The start of the unmatched input, at most `SNIPPET_CHARS` characters.
    pub snippet: String,
}

impl LexError {
    /// Creates an error for `input` at byte `offset`.
    #[must_use]
    pub fn new(input: &str, offset: usize) -> Self {
        let snippet = input
            .get(offset..)
            .unwrap_or_default()
            .chars()
            .take(SNIPPET_CHARS)
            .collect();
        Self { offset, snippet }
    }

    /// Returns the location of the first unmatched character.
    #[must_use]
    pub fn span(&self) -> Span {
        let len = self.snippet.chars().next().map_or(0, char::len_utf8);
        Span::at(self.offset, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_is_bounded() {
        let input = format!("SELECT {}", "#".repeat(100));
        let err = LexError::new(&input, 7);
        assert_eq!(err.offset, 7);
        assert_eq!(err.snippet.chars().count(), SNIPPET_CHARS);
    }

    #[test]
    fn test_span_covers_one_character() {
        let err = LexError::new("a é", 2);
        assert_eq!(err.span(), Span::new(2, 4));
    }

    #[test]
    fn test_display() {
        let err = LexError::new("SELECT #x", 7);
        assert_eq!(err.to_string(), "Unexpected \"#x\" at offset 7");
    }
}
