//! Byte ranges into the filter source, used to locate tokens in diagnostics.

use core::fmt;

/// A half-open byte range `start..end` into the filter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    /// An empty span sitting at `pos`, used for the end-of-input token.
    #[must_use]
    pub const fn at(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the span running from the start of `self` to the end of `other`.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self::new(self.start, other.end)
    }

    /// Returns the text covered by the span, or `None` if it does not fall on
    /// character boundaries of `source`.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::at(4).is_empty());
        assert!(!Span::new(4, 5).is_empty());
    }

    #[test]
    fn test_span_to() {
        let joined = Span::new(2, 4).to(Span::new(9, 12));
        assert_eq!(joined, Span::new(2, 12));
    }

    #[test]
    fn test_span_slice() {
        let source = "eq(type,1)";
        assert_eq!(Span::new(3, 7).slice(source), Some("type"));
        assert_eq!(Span::new(8, 40).slice(source), None);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(1, 6).to_string(), "1..6");
    }
}
