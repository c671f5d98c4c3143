//! Programmatic filter construction.
//!
//! Factory functions that produce the same nodes the parser does, for code
//! that wants to assemble a filter without formatting text first.
//!
//! # Example
//!
//! ```rust
//! use oxide_filter_core::builder::{and, eq, filter, neq, pattern};
//! use oxide_filter_core::ast::{Pattern, PatternPart};
//!
//! let org = Pattern::from_parts([
//!     PatternPart::Wildcard,
//!     PatternPart::Text(String::from("org")),
//!     PatternPart::Wildcard,
//! ]);
//! let built = filter(and(eq("Type", 1), neq("alias", pattern(org))));
//!
//! assert_eq!(built.to_string(), r#"AND ( EQ ( type, 1 ), NEQ ( alias, "*org*" ) )"#);
//! ```
//!
//! Built trees are not checked; run them through the
//! [`SyntaxChecker`](crate::syntax::SyntaxChecker) before transpiling.

use crate::ast::{Filter, Function, Node, Pattern, Value};
use crate::syntax::lowercase_identifier;

/// Wraps a root function.
#[must_use]
pub const fn filter(root: Function) -> Filter {
    Filter::new(root)
}

/// Creates an arbitrary function call.
#[must_use]
pub fn function(name: &str, parameters: Vec<Node>) -> Function {
    Function::new(name, parameters)
}

/// `NOT(inner)`.
#[must_use]
pub fn not(inner: Function) -> Function {
    Function::new("NOT", vec![Node::Function(inner)])
}

/// `AND(lhs, rhs)`.
#[must_use]
pub fn and(lhs: Function, rhs: Function) -> Function {
    logical("AND", lhs, rhs)
}

/// `OR(lhs, rhs)`.
#[must_use]
pub fn or(lhs: Function, rhs: Function) -> Function {
    logical("OR", lhs, rhs)
}

/// `EQ(field, value)`; the field is lower-cased.
#[must_use]
pub fn eq(field: &str, value: impl Into<Value>) -> Function {
    operator("EQ", field, value.into())
}

/// `NEQ(field, value)`.
#[must_use]
pub fn neq(field: &str, value: impl Into<Value>) -> Function {
    operator("NEQ", field, value.into())
}

/// `GT(field, value)`.
#[must_use]
pub fn gt(field: &str, value: impl Into<Value>) -> Function {
    operator("GT", field, value.into())
}

/// `GTE(field, value)`.
#[must_use]
pub fn gte(field: &str, value: impl Into<Value>) -> Function {
    operator("GTE", field, value.into())
}

/// `LT(field, value)`.
#[must_use]
pub fn lt(field: &str, value: impl Into<Value>) -> Function {
    operator("LT", field, value.into())
}

/// `LTE(field, value)`.
#[must_use]
pub fn lte(field: &str, value: impl Into<Value>) -> Function {
    operator("LTE", field, value.into())
}

/// `CONTAINS(field, value)`; the value should be a string.
#[must_use]
pub fn contains(field: &str, value: impl Into<Value>) -> Function {
    operator("CONTAINS", field, value.into())
}

/// `IN`; named with a trailing underscore since `in` is a keyword.
#[must_use]
pub fn in_(field: &str, value: impl Into<Value>) -> Function {
    operator("IN", field, value.into())
}

/// A string value with no wildcards; `*` is kept literally.
#[must_use]
pub fn string(text: &str) -> Value {
    Value::String(Pattern::literal(text))
}

/// A string value with explicit wildcard positions.
#[must_use]
pub const fn pattern(pattern: Pattern) -> Value {
    Value::String(pattern)
}

/// An integer value.
#[must_use]
pub fn integer(n: i64) -> Value {
    Value::Integer(n.to_string())
}

/// A decimal value, kept as written.
#[must_use]
pub fn decimal(text: &str) -> Value {
    Value::Decimal(String::from(text))
}

/// A bare identifier value, kept as written.
#[must_use]
pub fn identifier(name: &str) -> Value {
    Value::Identifier(String::from(name))
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        integer(n)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        string(text)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        pattern(p)
    }
}

fn logical(name: &str, lhs: Function, rhs: Function) -> Function {
    Function::new(name, vec![Node::Function(lhs), Node::Function(rhs)])
}

fn operator(name: &str, field: &str, value: Value) -> Function {
    Function::new(
        name,
        vec![
            Node::Value(Value::Identifier(lowercase_identifier(field))),
            Node::Value(value),
        ],
    )
}
