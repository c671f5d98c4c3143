//! Token types for the filter lexer.

use std::borrow::Cow;

use super::Span;
use crate::ast::Pattern;

/// Literal carried by the end-of-input token.
pub const EOF_LITERAL: &str = "\0";

/// The classification of a token, with its decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Input that matches no rule; holds the offending run for diagnostics.
    Illegal(String),
    /// End of input. Returned repeatedly once reached.
    Eof,

    // Literals
    /// A bare name: a letter followed by letters or underscores.
    Identifier(String),
    /// A double-quoted string, decoded into text and wildcard parts.
    String(Pattern),
    /// Digits with no decimal point, kept as written.
    Integer(String),
    /// Digits with exactly one decimal point, kept as written.
    Decimal(String),

    // Delimiters
    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl TokenKind {
    /// Upper-case name of the kind, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier(_) => "IDENTIFIER",
            Self::String(_) => "STRING",
            Self::Integer(_) => "INTEGER",
            Self::Decimal(_) => "DECIMAL",
            Self::Comma => "COMMA",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
        }
    }

    /// Returns the literal text of the token.
    ///
    /// Strings yield their decoded text with each wildcard shown as
    /// [`Pattern::WILDCARD_MARKER`]; the end of input yields [`EOF_LITERAL`].
    #[must_use]
    pub fn literal(&self) -> Cow<'_, str> {
        match self {
            Self::Illegal(text)
            | Self::Identifier(text)
            | Self::Integer(text)
            | Self::Decimal(text) => Cow::Borrowed(text.as_str()),
            Self::String(pattern) => Cow::Owned(pattern.text()),
            Self::Eof => Cow::Borrowed(EOF_LITERAL),
            Self::Comma => Cow::Borrowed(","),
            Self::LeftParen => Cow::Borrowed("("),
            Self::RightParen => Cow::Borrowed(")"),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if the lexer rejected this token.
    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        matches!(self.kind, TokenKind::Illegal(_))
    }

    /// See [`TokenKind::literal`].
    #[must_use]
    pub fn literal(&self) -> Cow<'_, str> {
        self.kind.literal()
    }
}
