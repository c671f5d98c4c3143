//! Tests for the top-level compile and transpile entry points.

mod common;
use common::*;

use oxide_filter_core::transpiler::{FieldMap, MysqlWhere};
use oxide_filter_core::{compile, compile_with_options, to_sql_where, FilterError, ParserOptions};

#[test]
fn compile_returns_checked_filter() {
    let checked = compile(r#"and(gt(type,1), neq(alias,"*org*"))"#).unwrap();
    assert_eq!(checked.root().name, "AND");
}

#[test]
fn to_sql_where_end_to_end() {
    let sql = to_sql_where(r#"and(gt(type,1), neq(alias,"*org*"))"#, &MysqlWhere::new()).unwrap();
    assert_eq!(sql, r#"(type > 1) AND (alias != "%org%")"#);
}

#[test]
fn errors_are_tagged_by_stage() {
    assert!(matches!(compile_err("eq(a,"), FilterError::Parse(_)));
    assert!(matches!(compile_err("eq(a,b)"), FilterError::Syntax(_)));

    let mysql = MysqlWhere::with_mapper(FieldMap::new());
    assert!(matches!(
        to_sql_where("eq(a,1)", &mysql),
        Err(FilterError::Transpile(_))
    ));
}

#[test]
fn parse_errors_win_over_semantic_ones() {
    // Unknown function and a missing paren: the parse error is reported.
    assert!(matches!(compile_err("bogus(a,1"), FilterError::Parse(_)));
}

#[test]
fn error_messages_name_the_stage() {
    assert_eq!(
        compile_err("not(eq(a,1),eq(b,2))").to_string(),
        "syntax error: function [NOT] should have 1 parameter, found 2"
    );
    let err = to_sql_where("eq(secret,1)", &MysqlWhere::with_mapper(FieldMap::new())).unwrap_err();
    assert_eq!(err.to_string(), "transpile error: invalid field [secret]");
}

#[test]
fn compile_with_depth_limit() {
    let options = ParserOptions { max_depth: 2 };
    assert!(compile_with_options("not(eq(a,1))", options).is_ok());
    assert!(matches!(
        compile_with_options("not(not(eq(a,1)))", options),
        Err(FilterError::Parse(_))
    ));
}

#[test]
fn checked_filter_serializes_to_json() {
    let checked = compile(r#"contains(alias,"a*")"#).unwrap();
    let json = serde_json::to_value(&checked).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "root": {
                "name": "CONTAINS",
                "parameters": [
                    { "kind": "identifier", "value": "alias" },
                    { "kind": "string", "value": [{ "text": "a" }, "wildcard"] }
                ]
            }
        })
    );
}

#[test]
fn tokens_for_sample_filter() {
    assert_eq!(
        lex(r#"and(gt(type,1), neq(alias,"x"))"#),
        vec![
            ("IDENTIFIER", String::from("and")),
            ("LPAREN", String::from("(")),
            ("IDENTIFIER", String::from("gt")),
            ("LPAREN", String::from("(")),
            ("IDENTIFIER", String::from("type")),
            ("COMMA", String::from(",")),
            ("INTEGER", String::from("1")),
            ("RPAREN", String::from(")")),
            ("COMMA", String::from(",")),
            ("IDENTIFIER", String::from("neq")),
            ("LPAREN", String::from("(")),
            ("IDENTIFIER", String::from("alias")),
            ("COMMA", String::from(",")),
            ("STRING", String::from("x")),
            ("RPAREN", String::from(")")),
            ("RPAREN", String::from(")")),
            ("EOF", String::from("\0")),
        ]
    );
}
