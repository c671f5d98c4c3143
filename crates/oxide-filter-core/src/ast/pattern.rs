//! String literal values with explicit wildcard positions.
//!
//! A bare `*` inside a filter string is a multi-character wildcard, while
//! `\*` is a literal asterisk. Instead of smuggling a sentinel character
//! through the text, string values keep the two apart structurally.

use core::fmt;

use serde::Serialize;

/// A piece of a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPart {
    /// Characters taken literally.
    Text(String),
    /// An unescaped `*`.
    Wildcard,
}

/// A decoded string literal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Pattern {
    parts: Vec<PatternPart>,
}

impl Pattern {
    /// Character standing in for a wildcard in the flat [`Pattern::text`] view.
    pub const WILDCARD_MARKER: char = '\u{FFFD}';

    /// Creates an empty pattern (the string `""`).
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Creates a pattern with no wildcards.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        let mut pattern = Self::new();
        pattern.push_str(&text.into());
        pattern
    }

    /// Creates a pattern from parts, merging adjacent text and dropping
    /// empty text parts.
    #[must_use]
    pub fn from_parts(parts: impl IntoIterator<Item = PatternPart>) -> Self {
        let mut pattern = Self::new();
        for part in parts {
            match part {
                PatternPart::Text(text) => pattern.push_str(&text),
                PatternPart::Wildcard => pattern.push_wildcard(),
            }
        }
        pattern
    }

    /// Appends a literal character.
    pub fn push_char(&mut self, c: char) {
        if let Some(PatternPart::Text(text)) = self.parts.last_mut() {
            text.push(c);
        } else {
            self.parts.push(PatternPart::Text(c.to_string()));
        }
    }

    /// Appends literal text.
    pub fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(PatternPart::Text(text)) = self.parts.last_mut() {
            text.push_str(s);
        } else {
            self.parts.push(PatternPart::Text(String::from(s)));
        }
    }

    /// Appends a wildcard.
    pub fn push_wildcard(&mut self) {
        self.parts.push(PatternPart::Wildcard);
    }

    /// The parts in order.
    #[must_use]
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// Returns true for the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns true if any part is a wildcard.
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, PatternPart::Wildcard))
    }

    /// Flattens the pattern into a single string, wildcards shown as
    /// [`Pattern::WILDCARD_MARKER`].
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                PatternPart::Text(text) => out.push_str(text),
                PatternPart::Wildcard => out.push(Self::WILDCARD_MARKER),
            }
        }
        out
    }
}

/// Renders the pattern back into filter source form, quotes included.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for part in &self.parts {
            match part {
                PatternPart::Text(text) => {
                    for c in text.chars() {
                        match c {
                            '\\' => f.write_str("\\\\")?,
                            '"' => f.write_str("\\\"")?,
                            '*' => f.write_str("\\*")?,
                            c => write!(f, "{c}")?,
                        }
                    }
                }
                PatternPart::Wildcard => f.write_str("*")?,
            }
        }
        f.write_str("\"")
    }
}
