//! # oxide-filter-core
//!
//! A small filter expression language and its compiler.
//!
//! Filters are nested function calls over named fields:
//!
//! ```text
//! and(gt(type, 1), neq(alias, "*org*"))
//! ```
//!
//! This crate provides:
//! - A hand-written lexer with number and string scanning
//! - An LL(1) recursive descent parser producing a typed tree
//! - A checker enforcing the function catalog (names, arity, parameter kinds)
//! - A transpiler emitting MySQL `WHERE` fragments with escaped string literals
//!
//! ## Compiling a filter
//!
//! ```rust
//! use oxide_filter_core::transpiler::MysqlWhere;
//! use oxide_filter_core::to_sql_where;
//!
//! let sql = to_sql_where(r#"and(gt(type,1), neq(alias,"*org*"))"#, &MysqlWhere::new()).unwrap();
//! assert_eq!(sql, r#"(type > 1) AND (alias != "%org%")"#);
//! ```
//!
//! ## Restricting fields
//!
//! Field names are passed through a mapper before they reach the output.
//! A [`FieldMap`](transpiler::FieldMap) acts as an allow-list:
//!
//! ```rust
//! use oxide_filter_core::transpiler::{FieldMap, MysqlWhere};
//! use oxide_filter_core::{FilterError, to_sql_where};
//!
//! let fields = FieldMap::new().with("type", "h.type");
//! let mysql = MysqlWhere::with_mapper(fields);
//!
//! assert_eq!(to_sql_where("eq(TYPE,2)", &mysql).unwrap(), "h.type = 2");
//! assert!(matches!(
//!     to_sql_where("eq(secret,2)", &mysql),
//!     Err(FilterError::Transpile(_))
//! ));
//! ```

pub mod ast;
pub mod builder;
mod error;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod transpiler;

use tracing::debug;

pub use ast::{Filter, Function, Node, Pattern, Value};
pub use error::{FilterError, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser, ParserOptions};
pub use syntax::{CheckedFilter, SyntaxChecker, SyntaxError};
pub use transpiler::{FieldMap, FieldMapper, MysqlWhere, TranspileError, Transpiler};

/// Parses and checks a filter.
///
/// # Errors
///
/// Returns [`FilterError::Parse`] or [`FilterError::Syntax`] for the first
/// problem found.
pub fn compile(input: &str) -> Result<CheckedFilter> {
    compile_with_options(input, ParserOptions::default())
}

/// Parses and checks a filter with custom parser settings.
///
/// # Errors
///
/// Returns [`FilterError::Parse`] or [`FilterError::Syntax`] for the first
/// problem found.
pub fn compile_with_options(input: &str, options: ParserOptions) -> Result<CheckedFilter> {
    debug!(input, "compiling filter");
    let filter = Parser::new(input).with_options(options).parse_filter()?;
    debug!(filter = %filter, "parsed filter");
    Ok(SyntaxChecker::new().check(filter)?)
}

/// Compiles a filter and renders it with `transpiler`.
///
/// # Errors
///
/// Returns the first error from any stage.
pub fn to_sql_where(input: &str, transpiler: &impl Transpiler) -> Result<String> {
    let checked = compile(input)?;
    let sql = transpiler.transpile(&checked)?;
    debug!(target_name = transpiler.name(), sql = %sql, "transpiled filter");
    Ok(sql)
}
