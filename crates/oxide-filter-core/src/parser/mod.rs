//! Filter parser.
//!
//! A hand-written LL(1) recursive descent parser. Parsing stops at the first
//! malformed construct and reports it as a [`ParseError`].

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use parser::{DEFAULT_MAX_DEPTH, Parser, ParserOptions};
