//! Filter parser implementation.

use tracing::trace;

use super::error::ParseError;
use crate::ast::{Filter, Function, Node, Value};
use crate::lexer::{Lexer, Token, TokenKind};

/// Default bound on function nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest allowed function nesting. The root function is depth 1.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// LL(1) recursive descent parser for filter expressions.
///
/// Holds the current token plus one token of lookahead; every production is
/// chosen from those two without backtracking.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    options: ParserOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_lexer(Lexer::new(input))
    }

    /// Creates a parser reading from an existing lexer at its current position.
    #[must_use]
    pub fn from_lexer(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            options: ParserOptions::default(),
            depth: 0,
        }
    }

    /// Replaces the parser settings.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses a complete filter: one function followed by the end of input.
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` encountered; no partial tree is returned.
    pub fn parse_filter(&mut self) -> Result<Filter, ParseError> {
        let name = self.expect_identifier("function name")?;
        let root = self.parse_function(name)?;

        if !self.current.is_eof() {
            return Err(ParseError::unexpected("end of input", &self.current));
        }
        Ok(Filter::new(root))
    }

    /// Parses `( Parameters )` after a function name has been consumed.
    fn parse_function(&mut self, name: String) -> Result<Function, ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::new(
                format!(
                    "maximum nesting depth of {} exceeded",
                    self.options.max_depth
                ),
                self.current.span,
            ));
        }
        trace!(function = %name, depth = self.depth, "parsing function");

        self.expect(&TokenKind::LeftParen, "\"(\"")?;

        // The first parameter always starts with a name: a field or a function.
        if !matches!(self.current.kind, TokenKind::Identifier(_)) {
            return Err(ParseError::unexpected(
                "field identifier as first parameter",
                &self.current,
            ));
        }

        let parameters = self.parse_parameters()?;
        self.expect(&TokenKind::RightParen, "\")\"")?;

        self.depth -= 1;
        Ok(Function::new(name, parameters))
    }

    /// Parses a comma separated parameter list, stopping before the `)`.
    fn parse_parameters(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut parameters = Vec::new();

        loop {
            if !starts_parameter(&self.current.kind) {
                return Err(ParseError::unexpected("a parameter", &self.current));
            }

            let parameter = match self.peek.kind {
                TokenKind::LeftParen => {
                    let name = self.expect_identifier("function name")?;
                    Node::Function(self.parse_function(name)?)
                }
                TokenKind::Comma | TokenKind::RightParen => Node::Value(self.expect_value()?),
                _ => return Err(ParseError::unexpected("\",\" or \")\"", &self.peek)),
            };
            parameters.push(parameter);

            match self.current.kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RightParen => return Ok(parameters),
                _ => return Err(ParseError::unexpected("\",\" or \")\"", &self.current)),
            }
        }
    }

    // --- Helper methods ---

    /// Advances to the next token, returning the one consumed.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = core::mem::replace(&mut self.peek, next);
        core::mem::replace(&mut self.current, peek)
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind, label: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(label, &self.current))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, label: &str) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(ParseError::unexpected(label, &self.current)),
        }
    }

    /// Expects and returns a value.
    fn expect_value(&mut self) -> Result<Value, ParseError> {
        match Value::from_token(self.current.kind.clone()) {
            Some(value) => {
                self.advance();
                Ok(value)
            }
            None => Err(ParseError::unexpected("a value", &self.current)),
        }
    }
}

const fn starts_parameter(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier(_)
            | TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
    )
}
