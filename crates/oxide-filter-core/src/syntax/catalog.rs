//! The compiled-in function catalog.
//!
//! | family         | names                          | parameters                        |
//! |----------------|--------------------------------|-----------------------------------|
//! | logical-unary  | NOT                            | function                          |
//! | logical-binary | AND, OR                        | function, function                |
//! | operator       | EQ, NEQ, GT, GTE, LT, LTE      | field identifier, non-identifier  |
//! | operator       | CONTAINS, IN                   | field identifier, string          |

use core::fmt;

/// How a function combines its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionFamily {
    LogicalUnary,
    LogicalBinary,
    Operator,
}

impl FunctionFamily {
    /// Number of parameters every function of the family takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::LogicalUnary => 1,
            Self::LogicalBinary | Self::Operator => 2,
        }
    }

    /// Lower-case family name, as used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LogicalUnary => "logical-unary",
            Self::LogicalBinary => "logical-binary",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    Not,
    And,
    Or,
}

/// Field comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    In,
}

impl Operator {
    /// Returns true if the compared value must be a string.
    #[must_use]
    pub const fn requires_string(self) -> bool {
        matches!(self, Self::Contains | Self::In)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionClass {
    Logical(LogicalOp),
    Operator(Operator),
}

impl FunctionClass {
    /// Looks up an upper-case function name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let class = match name {
            "NOT" => Self::Logical(LogicalOp::Not),
            "AND" => Self::Logical(LogicalOp::And),
            "OR" => Self::Logical(LogicalOp::Or),
            "EQ" => Self::Operator(Operator::Eq),
            "NEQ" => Self::Operator(Operator::Neq),
            "GT" => Self::Operator(Operator::Gt),
            "GTE" => Self::Operator(Operator::Gte),
            "LT" => Self::Operator(Operator::Lt),
            "LTE" => Self::Operator(Operator::Lte),
            "CONTAINS" => Self::Operator(Operator::Contains),
            "IN" => Self::Operator(Operator::In),
            _ => return None,
        };
        Some(class)
    }

    /// The family deciding arity and parameter kinds.
    #[must_use]
    pub const fn family(self) -> FunctionFamily {
        match self {
            Self::Logical(LogicalOp::Not) => FunctionFamily::LogicalUnary,
            Self::Logical(LogicalOp::And | LogicalOp::Or) => FunctionFamily::LogicalBinary,
            Self::Operator(_) => FunctionFamily::Operator,
        }
    }

    /// The canonical (upper-case) function name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Logical(LogicalOp::Not) => "NOT",
            Self::Logical(LogicalOp::And) => "AND",
            Self::Logical(LogicalOp::Or) => "OR",
            Self::Operator(Operator::Eq) => "EQ",
            Self::Operator(Operator::Neq) => "NEQ",
            Self::Operator(Operator::Gt) => "GT",
            Self::Operator(Operator::Gte) => "GTE",
            Self::Operator(Operator::Lt) => "LT",
            Self::Operator(Operator::Lte) => "LTE",
            Self::Operator(Operator::Contains) => "CONTAINS",
            Self::Operator(Operator::In) => "IN",
        }
    }
}
