//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, Token};

/// A syntax error: the first malformed construct found in the filter text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {span}")]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// What the parser was looking for (if applicable).
    pub expected: Option<String>,
    /// Kind name of the token actually found.
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "expected X, found Y" error at `found`.
    ///
    /// Illegal tokens get their own message quoting the rejected text.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        let expected: String = expected.into();
        let message = if found.is_illegal() {
            format!("illegal token {:?}, expected {expected}", found.literal())
        } else {
            format!("expected {expected}, found {}", found.kind.name())
        };
        Self {
            message,
            span: found.span,
            expected: Some(expected),
            found: Some(String::from(found.kind.name())),
        }
    }
}
