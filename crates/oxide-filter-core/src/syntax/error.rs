//! Semantic error types.

use thiserror::Error;

use crate::ast::ValueKind;

/// A well-formed filter that breaks the function catalog's rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The function name is not in the catalog.
    #[error("function [{name}] is not recognized")]
    UnknownFunction { name: String },

    /// Wrong number of parameters.
    #[error("function [{function}] should have {expected} parameter{}, found {found}", plural(.expected))]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    /// A logical function received a value where a function belongs.
    #[error("function [{function}] parameter {position} should be a function")]
    ExpectedFunction { function: String, position: usize },

    /// An operator received a function where a value belongs.
    #[error("function [{function}] parameter {position} should be a value")]
    ExpectedValue { function: String, position: usize },

    /// An operator's first parameter is a literal instead of a field name.
    #[error("function [{function}] parameter 1 should be a field identifier, not {found}")]
    ExpectedFieldIdentifier { function: String, found: ValueKind },

    /// An operator's second parameter is a field name instead of a literal.
    #[error("function [{function}] parameter 2 should not be an identifier")]
    UnexpectedIdentifier { function: String },

    /// `CONTAINS`/`IN` compared against something other than a string.
    #[error("function [{function}] parameter 2 should be a string, not {found}")]
    ExpectedString { function: String, found: ValueKind },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn plural(n: &usize) -> &'static str {
    if *n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SyntaxError::Arity {
            function: String::from("NOT"),
            expected: 1,
            found: 2,
        };
        assert_eq!(err.to_string(), "function [NOT] should have 1 parameter, found 2");

        let err = SyntaxError::Arity {
            function: String::from("EQ"),
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "function [EQ] should have 2 parameters, found 3");

        let err = SyntaxError::ExpectedString {
            function: String::from("CONTAINS"),
            found: ValueKind::Integer,
        };
        assert_eq!(
            err.to_string(),
            "function [CONTAINS] parameter 2 should be a string, not INTEGER"
        );
    }
}
