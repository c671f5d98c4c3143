//! Tests for MySQL WHERE fragment generation.

mod common;
use common::*;

use oxide_filter_core::transpiler::{FieldMap, MysqlWhere, TranspileError, Transpiler};

#[test]
fn transpile_operators() {
    assert_eq!(sql("eq(a,1)"), "a = 1");
    assert_eq!(sql("neq(a,1)"), "a != 1");
    assert_eq!(sql("gt(type,1)"), "type > 1");
    assert_eq!(sql("gte(a,1.5)"), "a >= 1.5");
    assert_eq!(sql("lt(a,.5)"), "a < .5");
    assert_eq!(sql(r#"lte(a,"m")"#), r#"a <= "m""#);
    assert_eq!(sql(r#"contains(a,"x")"#), r#"a LIKE "x""#);
    assert_eq!(sql(r#"in(a,"x")"#), r#"a IN "x""#);
}

#[test]
fn transpile_wildcards() {
    assert_eq!(sql(r#"neq(alias,"*org*")"#), r#"alias != "%org%""#);
    assert_eq!(sql(r#"contains(alias,"a*b")"#), r#"alias LIKE "a%b""#);
    assert_eq!(sql(r#"contains(alias,"a\*b")"#), r#"alias LIKE "a*b""#);
}

#[test]
fn transpile_escapes() {
    assert_eq!(sql(r#"contains(alias,"a\"b")"#), r#"alias LIKE "a\"b""#);
    assert_eq!(sql(r#"eq(a,"x'y")"#), r#"a = "x\'y""#);
    assert_eq!(sql(r#"eq(a,"100%")"#), r#"a = "100\%""#);
    assert_eq!(sql(r#"eq(a,"\\")"#), r#"a = "\\""#);
    // A backslash before an ordinary character is kept, then doubled.
    assert_eq!(sql(r#"eq(a,"\n")"#), r#"a = "\\n""#);
}

#[test]
fn transpile_injection_attempt_stays_quoted() {
    assert_eq!(
        sql(r#"eq(name,"\" OR 1=1 -- ")"#),
        r#"name = "\" OR 1=1 -- ""#
    );
}

#[test]
fn transpile_logical() {
    assert_eq!(
        sql(r#"and(gt(type,1), neq(alias,"*org*"))"#),
        r#"(type > 1) AND (alias != "%org%")"#
    );
    assert_eq!(
        sql("or(and(eq(a,1), eq(b,2)), not(eq(c,3)))"),
        "((a = 1) AND (b = 2)) OR (NOT(c = 3))"
    );
}

#[test]
fn transpile_case_insensitive_input() {
    assert_eq!(sql("AND(GT(Type,1), Lt(TYPE,9))"), "(type > 1) AND (type < 9)");
}

#[test]
fn transpile_rejected_field() {
    let mapper = |field: &str| (field != "secret").then(|| String::from(field));
    let err = MysqlWhere::with_mapper(mapper)
        .transpile(&check("and(eq(type,1), eq(secret,2))"))
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid field [secret]");
    assert_eq!(
        err,
        TranspileError::FieldRejected {
            field: String::from("secret")
        }
    );
}

#[test]
fn transpile_with_field_map() {
    let fields = FieldMap::new()
        .with("type", "hosts.type")
        .with("alias", "hosts.alias");
    let mysql = MysqlWhere::with_mapper(fields);
    assert_eq!(
        mysql
            .transpile(&check(r#"or(eq(Type,2), contains(alias,"*x"))"#))
            .unwrap(),
        r#"(hosts.type = 2) OR (hosts.alias LIKE "%x")"#
    );
    assert!(mysql.transpile(&check("eq(other,1)")).is_err());
}

#[test]
fn transpile_twice_with_different_mappers() {
    let checked = check("eq(type,1)");
    let first = MysqlWhere::new().transpile(&checked).unwrap();
    let second = MysqlWhere::with_mapper(|f: &str| Some(format!("`{f}`")))
        .transpile(&checked)
        .unwrap();
    assert_eq!(first, "type = 1");
    assert_eq!(second, "`type` = 1");
}
