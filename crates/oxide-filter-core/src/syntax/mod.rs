//! Semantic checking.
//!
//! The parser only guarantees shape. The [`SyntaxChecker`] enforces the
//! function catalog on top of it: known names, arities, and which parameters
//! must be functions, field identifiers, or string literals.

mod catalog;
mod checker;
mod error;

pub use catalog::{FunctionClass, FunctionFamily, LogicalOp, Operator};
pub use checker::{CheckedFilter, SyntaxChecker};
pub(crate) use checker::lowercase_identifier;
pub use error::SyntaxError;
