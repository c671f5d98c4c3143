//! Filter tree node types.

use core::fmt;
use std::borrow::Cow;

use serde::Serialize;

use super::Pattern;
use crate::lexer::TokenKind;

/// The kind of a [`Value`], mirroring the token kind it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Identifier,
    String,
    Integer,
    Decimal,
}

impl ValueKind {
    /// Upper-case name, matching [`TokenKind::name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Decimal => "DECIMAL",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A leaf holding a literal, or a bare field name when it is an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A bare name, referring to a field.
    Identifier(String),
    /// A string literal.
    String(Pattern),
    /// An integer, as written.
    Integer(String),
    /// A decimal number, as written.
    Decimal(String),
}

impl Value {
    /// Converts a token into a value, if the token is one of the value kinds.
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Identifier(name) => Some(Self::Identifier(name)),
            TokenKind::String(pattern) => Some(Self::String(pattern)),
            TokenKind::Integer(text) => Some(Self::Integer(text)),
            TokenKind::Decimal(text) => Some(Self::Decimal(text)),
            _ => None,
        }
    }

    /// The kind of token this value was read from.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Identifier(_) => ValueKind::Identifier,
            Self::String(_) => ValueKind::String,
            Self::Integer(_) => ValueKind::Integer,
            Self::Decimal(_) => ValueKind::Decimal,
        }
    }

    /// Returns true for a bare field name.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// The value's text as it was scanned; wildcards in strings are shown as
    /// [`Pattern::WILDCARD_MARKER`].
    #[must_use]
    pub fn literal(&self) -> Cow<'_, str> {
        match self {
            Self::Identifier(text) | Self::Integer(text) | Self::Decimal(text) => {
                Cow::Borrowed(text.as_str())
            }
            Self::String(pattern) => Cow::Owned(pattern.text()),
        }
    }

    /// The field name, if this value is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(text) | Self::Integer(text) | Self::Decimal(text) => {
                f.write_str(text)
            }
            Self::String(pattern) => write!(f, "{pattern}"),
        }
    }
}

/// A function parameter: either a nested function or a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Function(Function),
    Value(Value),
}

impl Node {
    /// The nested function, if this parameter is one.
    #[must_use]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            Self::Value(_) => None,
        }
    }

    /// The value, if this parameter is one.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Function(_) => None,
        }
    }
}

impl From<Function> for Node {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(function) => write!(f, "{function}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// A named call with ordered parameters, e.g. `eq(type, 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// The function name. Upper-cased once the tree has been checked.
    pub name: String,
    /// The parameters, in source order.
    pub parameters: Vec<Node>,
}

impl Function {
    /// Creates a new function node.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ( ", self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        f.write_str(" )")
    }
}

/// The top-level compiled unit, wrapping exactly one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub root: Function,
}

impl Filter {
    /// Wraps a root function.
    #[must_use]
    pub const fn new(root: Function) -> Self {
        Self { root }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
