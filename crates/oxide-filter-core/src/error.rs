//! Pipeline error type.

use crate::parser::ParseError;
use crate::syntax::SyntaxError;
use crate::transpiler::TranspileError;

/// Errors from any stage of the filter pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The input is not a well-formed filter.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The filter breaks the function catalog's rules.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// The filter cannot be emitted for the chosen target.
    #[error("transpile error: {0}")]
    Transpile(#[from] TranspileError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, FilterError>;
