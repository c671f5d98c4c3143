//! Subcommand implementations. Each returns the text to print.

use anyhow::Result;
use oxide_filter_core::transpiler::{FieldMap, MysqlWhere, Transpiler};
use oxide_filter_core::{compile_with_options, FilterError, Lexer, ParserOptions};

/// One line per token, `KIND "literal"`, through the end of input.
pub fn tokens(input: &str) -> String {
    Lexer::new(input)
        .tokenize()
        .iter()
        .map(|token| format!("{} {:?}\n", token.kind.name(), token.literal()))
        .collect()
}

/// The checked tree, either canonical text or JSON.
pub fn ast(input: &str, options: ParserOptions, json: bool) -> Result<String> {
    let checked = compile_with_options(input, options)?;
    if json {
        Ok(serde_json::to_string_pretty(&checked)?)
    } else {
        Ok(checked.to_string())
    }
}

/// A complete `WHERE` clause.
pub fn sql(input: &str, options: ParserOptions, fields: Option<FieldMap>) -> Result<String> {
    let checked = compile_with_options(input, options)?;
    let fragment = match fields {
        Some(fields) => MysqlWhere::with_mapper(fields).transpile(&checked),
        None => MysqlWhere::new().transpile(&checked),
    }
    .map_err(FilterError::from)?;
    Ok(format!("WHERE {fragment}"))
}
