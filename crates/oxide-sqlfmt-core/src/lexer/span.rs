//! Source location tracking for tokens and AST nodes.

/// A byte range in the formatted source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span of `len` bytes starting at `start`.
    #[must_use]
    pub const fn at(start: usize, len: usize) -> Self {
        Self::new(start, start + len)
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }
}

impl core::fmt::Display for Span {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at() {
        let span = Span::at(7, 4);
        assert_eq!(span, Span::new(7, 11));
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(3, 3).is_empty());
        assert!(!Span::new(3, 4).is_empty());
    }

    #[test]
    fn test_span_merge_is_order_independent() {
        let select = Span::new(0, 6);
        let star = Span::new(7, 8);
        assert_eq!(select.merge(star), Span::new(0, 8));
        assert_eq!(star.merge(select), Span::new(0, 8));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(12, 20).to_string(), "12..20");
    }
}
