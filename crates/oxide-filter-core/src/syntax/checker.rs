//! Semantic checking and normalization of parsed filters.

use core::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::catalog::{FunctionClass, Operator};
use super::error::SyntaxError;
use crate::ast::{Filter, Function, Node, Value, ValueKind};
use crate::lexer::is_identifier_continue;

/// A filter that has passed the [`SyntaxChecker`].
///
/// Function names are upper-case, operator fields are lower-case, and every
/// function matches the catalog's arity and parameter rules. This is the only
/// form the transpilers accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckedFilter(Filter);

impl CheckedFilter {
    /// The root function of the checked tree.
    #[must_use]
    pub const fn root(&self) -> &Function {
        &self.0.root
    }

    /// Gives the tree back, dropping the checked guarantee.
    #[must_use]
    pub fn into_inner(self) -> Filter {
        self.0
    }
}

impl fmt::Display for CheckedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Walks a parsed filter depth first, enforcing the function catalog.
///
/// This is the one place a tree is mutated: function names are upper-cased
/// and operator field identifiers lower-cased as they are visited. The walk
/// stops at the first violation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxChecker;

impl SyntaxChecker {
    /// Creates a checker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks and normalizes `filter`, returning it as a [`CheckedFilter`].
    ///
    /// # Errors
    ///
    /// Returns the first `SyntaxError` found, left to right.
    pub fn check(&self, mut filter: Filter) -> Result<CheckedFilter, SyntaxError> {
        self.verify(&mut filter)?;
        debug!(filter = %filter, "filter passed syntax check");
        Ok(CheckedFilter(filter))
    }

    /// Checks and normalizes `filter` in place.
    ///
    /// On error the tree may be partially normalized.
    ///
    /// # Errors
    ///
    /// Returns the first `SyntaxError` found, left to right.
    pub fn verify(&self, filter: &mut Filter) -> Result<(), SyntaxError> {
        self.verify_function(None, &mut filter.root)
    }

    fn verify_function(
        &self,
        parent: Option<&str>,
        function: &mut Function,
    ) -> Result<(), SyntaxError> {
        function.name = function.name.to_uppercase();
        trace!(
            function = %function.name,
            parent = parent.unwrap_or("-"),
            "checking function"
        );

        let Some(class) = FunctionClass::lookup(&function.name) else {
            return Err(SyntaxError::UnknownFunction {
                name: function.name.clone(),
            });
        };

        let expected = class.family().arity();
        let found = function.parameters.len();
        if found != expected {
            return Err(SyntaxError::Arity {
                function: function.name.clone(),
                expected,
                found,
            });
        }

        match class {
            FunctionClass::Logical(_) => {
                if let Some(position) = function
                    .parameters
                    .iter()
                    .position(|p| p.as_function().is_none())
                {
                    return Err(SyntaxError::ExpectedFunction {
                        function: function.name.clone(),
                        position: position + 1,
                    });
                }

                let name = function.name.as_str();
                for parameter in &mut function.parameters {
                    if let Node::Function(child) = parameter {
                        self.verify_function(Some(name), child)?;
                    }
                }
                Ok(())
            }
            FunctionClass::Operator(op) => Self::verify_operator(op, function),
        }
    }

    fn verify_operator(op: Operator, function: &mut Function) -> Result<(), SyntaxError> {
        let Function { name, parameters } = function;
        let [field, value] = parameters.as_mut_slice() else {
            return Err(SyntaxError::Arity {
                function: name.clone(),
                expected: 2,
                found: parameters.len(),
            });
        };

        match field {
            Node::Value(Value::Identifier(ident)) => *ident = lowercase_identifier(ident),
            Node::Value(other) => {
                return Err(SyntaxError::ExpectedFieldIdentifier {
                    function: name.clone(),
                    found: other.kind(),
                });
            }
            Node::Function(_) => {
                return Err(SyntaxError::ExpectedValue {
                    function: name.clone(),
                    position: 1,
                });
            }
        }

        match value {
            Node::Function(_) => Err(SyntaxError::ExpectedValue {
                function: name.clone(),
                position: 2,
            }),
            Node::Value(Value::Identifier(_)) => Err(SyntaxError::UnexpectedIdentifier {
                function: name.clone(),
            }),
            Node::Value(v) if op.requires_string() && v.kind() != ValueKind::String => {
                Err(SyntaxError::ExpectedString {
                    function: name.clone(),
                    found: v.kind(),
                })
            }
            Node::Value(_) => Ok(()),
        }
    }
}

/// Lower-cases a field name one character at a time.
///
/// A character whose lower-case form would not lex back as part of an
/// identifier (`İ` becomes `i` plus a combining dot) is kept as written.
pub(crate) fn lowercase_identifier(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for c in ident.chars() {
        let lower = c.to_lowercase();
        if lower.clone().all(is_identifier_continue) {
            out.extend(lower);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;
    use crate::parser::Parser;

    fn check(input: &str) -> Result<CheckedFilter, SyntaxError> {
        let filter = Parser::new(input)
            .parse_filter()
            .unwrap_or_else(|e| panic!("failed to parse {input}: {e}"));
        SyntaxChecker::new().check(filter)
    }

    fn check_err(input: &str) -> SyntaxError {
        check(input).expect_err(&format!("expected syntax error for: {input}"))
    }

    #[test]
    fn test_normalizes_case() {
        let checked = check(r#"And(gT(Type,1),neq(ALIAS,"Org"))"#).unwrap();
        assert_eq!(
            checked.to_string(),
            r#"AND ( GT ( type, 1 ), NEQ ( alias, "Org" ) )"#
        );
    }

    #[test]
    fn test_string_values_keep_case() {
        let checked = check(r#"eq(name,"MiXeD")"#).unwrap();
        assert_eq!(checked.to_string(), r#"EQ ( name, "MiXeD" )"#);
    }

    #[test]
    fn test_lowercase_keeps_unlexable_forms() {
        assert_eq!(lowercase_identifier("HostName"), "hostname");
        assert_eq!(lowercase_identifier("\u{130}d"), "\u{130}d");
        assert_eq!(lowercase_identifier("Größe_X"), "größe_x");

        let checked = check("eq(\u{130}D,1)").unwrap();
        assert_eq!(checked.to_string(), "EQ ( \u{130}d, 1 )");
        let again = check(&checked.to_string()).unwrap();
        assert_eq!(again, checked);
    }

    #[test]
    fn test_verify_in_place() {
        let mut filter = Parser::new("not(eq(Type,1))").parse_filter().unwrap();
        SyntaxChecker::new().verify(&mut filter).unwrap();
        assert_eq!(filter.root.name, "NOT");
        assert_eq!(filter.to_string(), "NOT ( EQ ( type, 1 ) )");
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            check_err("like(a,\"x\")"),
            SyntaxError::UnknownFunction {
                name: String::from("LIKE")
            }
        );
    }

    #[test]
    fn test_not_arity() {
        assert_eq!(
            check_err("not(eq(type,1),eq(type,2))"),
            SyntaxError::Arity {
                function: String::from("NOT"),
                expected: 1,
                found: 2,
            }
        );
    }

    #[test]
    fn test_not_requires_function() {
        assert_eq!(
            check_err("not(type)"),
            SyntaxError::ExpectedFunction {
                function: String::from("NOT"),
                position: 1,
            }
        );
    }

    #[test]
    fn test_binary_arity() {
        assert!(matches!(
            check_err("and(eq(a,1))"),
            SyntaxError::Arity { expected: 2, found: 1, .. }
        ));
        assert!(matches!(
            check_err("or(eq(a,1),eq(b,2),eq(c,3))"),
            SyntaxError::Arity { expected: 2, found: 3, .. }
        ));
    }

    #[test]
    fn test_binary_requires_functions() {
        assert_eq!(
            check_err("and(eq(a,1), 2)"),
            SyntaxError::ExpectedFunction {
                function: String::from("AND"),
                position: 2,
            }
        );
    }

    #[test]
    fn test_operator_arity() {
        assert!(matches!(
            check_err("eq(a,1,2)"),
            SyntaxError::Arity { expected: 2, found: 3, .. }
        ));
        assert!(matches!(
            check_err("eq(a)"),
            SyntaxError::Arity { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_operator_rejects_function_parameter() {
        assert_eq!(
            check_err("eq(a, eq(b,1))"),
            SyntaxError::ExpectedValue {
                function: String::from("EQ"),
                position: 2,
            }
        );
        assert_eq!(
            check_err("eq(eq(b,1), 1)"),
            SyntaxError::ExpectedValue {
                function: String::from("EQ"),
                position: 1,
            }
        );
    }

    #[test]
    fn test_operator_field_must_be_identifier() {
        // The parser never produces this shape, so build it directly.
        let filter = builder::filter(builder::function(
            "eq",
            vec![builder::integer(1).into(), builder::identifier("type").into()],
        ));
        let err = SyntaxChecker::new().check(filter).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::ExpectedFieldIdentifier {
                function: String::from("EQ"),
                found: ValueKind::Integer,
            }
        );
    }

    #[test]
    fn test_operator_value_must_not_be_identifier() {
        assert_eq!(
            check_err("eq(a,b)"),
            SyntaxError::UnexpectedIdentifier {
                function: String::from("EQ")
            }
        );
    }

    #[test]
    fn test_contains_and_in_require_string() {
        assert_eq!(
            check_err("contains(alias,5)"),
            SyntaxError::ExpectedString {
                function: String::from("CONTAINS"),
                found: ValueKind::Integer,
            }
        );
        assert!(matches!(
            check_err("in(alias,1.5)"),
            SyntaxError::ExpectedString {
                found: ValueKind::Decimal,
                ..
            }
        ));
        assert!(check(r#"contains(alias,"*org*")"#).is_ok());
        assert!(check(r#"in(alias,"a,b")"#).is_ok());
    }

    #[test]
    fn test_comparisons_accept_strings() {
        for op in ["eq", "neq", "gt", "gte", "lt", "lte"] {
            assert!(check(&format!(r#"{op}(name,"m")"#)).is_ok(), "{op}");
        }
    }

    #[test]
    fn test_first_error_wins() {
        // Both branches are invalid; only the left one is reported.
        assert_eq!(
            check_err("and(bogus(a,1), contains(b,2))"),
            SyntaxError::UnknownFunction {
                name: String::from("BOGUS")
            }
        );
        assert_eq!(
            check_err("or(eq(a,1), and(contains(b,2), bogus(c,1)))"),
            SyntaxError::ExpectedString {
                function: String::from("CONTAINS"),
                found: ValueKind::Integer,
            }
        );
    }
}
