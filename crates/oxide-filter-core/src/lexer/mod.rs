//! Filter lexer.
//!
//! A hand-written lexer that turns filter text into a stream of classified
//! tokens. It knows nothing about the grammar above the token level.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{EOF_LITERAL, Token, TokenKind};
pub use tokenizer::Lexer;
pub(crate) use tokenizer::is_identifier_continue;
