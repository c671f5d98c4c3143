//! Abstract syntax tree for filter expressions.
//!
//! ```text
//! Filter     ::= Function EOF
//! Function   ::= IDENTIFIER "(" Parameters ")"
//! Parameters ::= Parameter ("," Parameter)*
//! Parameter  ::= Function | Value
//! Value      ::= STRING | INTEGER | DECIMAL | IDENTIFIER
//! ```
//!
//! Trees are owned outright: a [`Filter`] owns its root [`Function`], and each
//! function owns its parameters. The `Display` implementations produce the
//! canonical rendering, which parses back into an identical tree.

mod node;
mod pattern;

pub use node::{Filter, Function, Node, Value, ValueKind};
pub use pattern::{Pattern, PatternPart};
