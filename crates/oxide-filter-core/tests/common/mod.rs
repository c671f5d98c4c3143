#![allow(dead_code)]

use oxide_filter_core::transpiler::{MysqlWhere, Transpiler};
use oxide_filter_core::{
    CheckedFilter, Filter, FilterError, Lexer, ParseError, Parser, SyntaxChecker, SyntaxError,
    TokenKind,
};

pub fn parse(input: &str) -> Filter {
    Parser::new(input)
        .parse_filter()
        .unwrap_or_else(|e| panic!("Failed to parse: {input}\nError: {e:?}"))
}

pub fn parse_err(input: &str) -> ParseError {
    Parser::new(input)
        .parse_filter()
        .expect_err(&format!("Expected parse error for: {input}"))
}

pub fn check(input: &str) -> CheckedFilter {
    SyntaxChecker::new()
        .check(parse(input))
        .unwrap_or_else(|e| panic!("Failed to check: {input}\nError: {e:?}"))
}

pub fn check_err(input: &str) -> SyntaxError {
    SyntaxChecker::new()
        .check(parse(input))
        .expect_err(&format!("Expected syntax error for: {input}"))
}

pub fn sql(input: &str) -> String {
    MysqlWhere::new()
        .transpile(&check(input))
        .unwrap_or_else(|e| panic!("Failed to transpile: {input}\nError: {e:?}"))
}

pub fn compile_err(input: &str) -> FilterError {
    oxide_filter_core::compile(input).expect_err(&format!("Expected error for: {input}"))
}

/// Token kinds and literals, end of input included.
pub fn lex(input: &str) -> Vec<(&'static str, String)> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|t| (t.kind.name(), t.literal().into_owned()))
        .collect()
}

pub fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Verifies that a checked filter's rendering compiles back to the same
/// checked tree and the same rendering.
pub fn checked_round_trip(input: &str) {
    let checked1 = check(input);
    let rendered1 = checked1.to_string();
    let checked2 = check(&rendered1);
    let rendered2 = checked2.to_string();
    assert_eq!(
        checked1, checked2,
        "Checked round-trip changed the tree for: {input}"
    );
    assert_eq!(
        rendered1, rendered2,
        "Checked round-trip failed.\n  Input:    {input}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(input).to_string() can be re-parsed and yields the same
/// tree and string again.
pub fn round_trip(input: &str) {
    let tree1 = parse(input);
    let rendered1 = tree1.to_string();
    let tree2 = parse(&rendered1);
    let rendered2 = tree2.to_string();
    assert_eq!(tree1, tree2, "Round-trip changed the tree for: {input}");
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {input}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
