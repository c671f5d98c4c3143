//! Query fragment generation.
//!
//! A [`Transpiler`] turns a [`CheckedFilter`] into text for one target
//! language. Field names pass through a [`FieldMapper`] on the way out, which
//! can rename them or reject them outright.

mod mapper;
mod mysql;

use thiserror::Error;

pub use mapper::{FieldMap, FieldMapper, IdentityMapper};
pub use mysql::MysqlWhere;

use crate::syntax::CheckedFilter;

/// Errors raised while emitting a checked filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    /// The field mapper refused the field.
    #[error("invalid field [{field}]")]
    FieldRejected { field: String },

    /// The target has no rendering for this function.
    #[error("function [{name}] is not supported by this target")]
    UnsupportedFunction { name: String },

    /// The function's parameters do not have the checked shape.
    #[error("function [{name}] has malformed parameters")]
    MalformedFunction { name: String },
}

/// A target query language.
pub trait Transpiler {
    /// Returns the name of the target.
    fn name(&self) -> &'static str;

    /// Renders the filter.
    ///
    /// # Errors
    ///
    /// Returns the first `TranspileError` met, left to right.
    fn transpile(&self, filter: &CheckedFilter) -> Result<String, TranspileError>;
}
