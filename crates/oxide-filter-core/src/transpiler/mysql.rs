//! MySQL `WHERE` clause fragments.

use tracing::{trace, warn};

use super::mapper::{FieldMapper, IdentityMapper};
use super::{TranspileError, Transpiler};
use crate::ast::{Function, Node, Pattern, PatternPart, Value};
use crate::syntax::{CheckedFilter, FunctionClass, LogicalOp, Operator};

/// Emits a fragment suitable for use after `WHERE` in a MySQL query.
///
/// | function | output                 |
/// |----------|------------------------|
/// | NOT      | `NOT(<child>)`         |
/// | AND      | `(<lhs>) AND (<rhs>)`  |
/// | OR       | `(<lhs>) OR (<rhs>)`   |
/// | EQ       | `<field> = <value>`    |
/// | NEQ      | `<field> != <value>`   |
/// | GT, GTE  | `<field> > <value>`, `<field> >= <value>` |
/// | LT, LTE  | `<field> < <value>`, `<field> <= <value>` |
/// | CONTAINS | `<field> LIKE <value>` |
/// | IN       | `<field> IN <value>`   |
///
/// Numbers are emitted as written. Strings are double-quoted with `\`, `"`,
/// `'` and `%` backslash-escaped, and each wildcard becomes `%`.
///
/// The output embeds values inline; treat it as raw SQL text.
#[derive(Debug, Default, Clone)]
pub struct MysqlWhere<M = IdentityMapper> {
    mapper: M,
}

impl MysqlWhere {
    /// Creates a transpiler that keeps field names as written.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mapper: IdentityMapper,
        }
    }
}

impl<M: FieldMapper> MysqlWhere<M> {
    /// Creates a transpiler that maps fields through `mapper`.
    #[must_use]
    pub const fn with_mapper(mapper: M) -> Self {
        Self { mapper }
    }

    fn function(&self, function: &Function) -> Result<String, TranspileError> {
        trace!(function = %function.name, "emitting function");

        let class = FunctionClass::lookup(&function.name).ok_or_else(|| {
            TranspileError::UnsupportedFunction {
                name: function.name.clone(),
            }
        })?;

        match class {
            FunctionClass::Logical(op) => self.logical(op, function),
            FunctionClass::Operator(op) => self.operator(op, function),
        }
    }

    fn logical(&self, op: LogicalOp, function: &Function) -> Result<String, TranspileError> {
        let operands = function
            .parameters
            .iter()
            .map(|parameter| match parameter {
                Node::Function(child) => self.function(child),
                Node::Value(_) => Err(malformed(function)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        match (op, operands.as_slice()) {
            (LogicalOp::Not, [inner]) => Ok(format!("NOT({inner})")),
            (LogicalOp::And, [lhs, rhs]) => Ok(format!("({lhs}) AND ({rhs})")),
            (LogicalOp::Or, [lhs, rhs]) => Ok(format!("({lhs}) OR ({rhs})")),
            _ => Err(malformed(function)),
        }
    }

    fn operator(&self, op: Operator, function: &Function) -> Result<String, TranspileError> {
        let [Node::Value(field), Node::Value(value)] = function.parameters.as_slice() else {
            return Err(malformed(function));
        };
        let field = field.as_identifier().ok_or_else(|| malformed(function))?;

        let column = self.column(field)?;
        let value = match value {
            Value::String(pattern) => quote(pattern),
            Value::Integer(text) | Value::Decimal(text) => text.clone(),
            Value::Identifier(_) => return Err(malformed(function)),
        };

        Ok(format!("{column} {} {value}", sql_operator(op)))
    }

    fn column(&self, field: &str) -> Result<String, TranspileError> {
        match self.mapper.map_field(field) {
            Some(column) if !column.is_empty() => Ok(column),
            _ => {
                warn!(field, "field rejected by mapper");
                Err(TranspileError::FieldRejected {
                    field: String::from(field),
                })
            }
        }
    }
}

impl<M: FieldMapper> Transpiler for MysqlWhere<M> {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn transpile(&self, filter: &CheckedFilter) -> Result<String, TranspileError> {
        self.function(filter.root())
    }
}

const fn sql_operator(op: Operator) -> &'static str {
    match op {
        Operator::Eq => "=",
        Operator::Neq => "!=",
        Operator::Gt => ">",
        Operator::Gte => ">=",
        Operator::Lt => "<",
        Operator::Lte => "<=",
        Operator::Contains => "LIKE",
        Operator::In => "IN",
    }
}

fn malformed(function: &Function) -> TranspileError {
    TranspileError::MalformedFunction {
        name: function.name.clone(),
    }
}

/// Quotes a string value as a MySQL literal.
fn quote(pattern: &Pattern) -> String {
    let mut out = String::from("\"");
    for part in pattern.parts() {
        match part {
            PatternPart::Text(text) => {
                for c in text.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '"' => out.push_str("\\\""),
                        '\'' => out.push_str("\\'"),
                        '%' => out.push_str("\\%"),
                        c => out.push(c),
                    }
                }
            }
            PatternPart::Wildcard => out.push('%'),
        }
    }
    out.push('"');
    out
}
