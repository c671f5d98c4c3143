//! Filter tokenizer implementation.

use unicode_general_category::{get_general_category, GeneralCategory};

use super::{Span, Token, TokenKind};
use crate::ast::Pattern;

/// A lexer that tokenizes filter input.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]; once the input
/// is exhausted every further call returns [`TokenKind::Eof`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Rewinds to the start of the same input.
    pub fn reset(&mut self) -> &mut Self {
        self.pos = 0;
        self.start = 0;
        self
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Creates a token spanning from the token start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    /// The text consumed since the token start.
    fn lexeme(&self) -> String {
        String::from(&self.input[self.start..self.pos])
    }

    /// Scans an identifier: a letter followed by letters or underscores.
    fn scan_identifier(&mut self) -> Token {
        self.advance();
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }
        self.make_token(TokenKind::Identifier(self.lexeme()))
    }

    /// Scans a run of digits and decimal points.
    ///
    /// States: integer part, then (after one point) a fraction that needs at
    /// least one digit. A second point ends the run as illegal, point
    /// included; running out of digits right after a point is illegal too.
    fn scan_number(&mut self) -> Token {
        let mut seen_point = false;
        let mut needs_digit = false;
        let mut illegal = false;

        while let Some(c) = self.peek() {
            if c == '.' {
                self.advance();
                if seen_point {
                    illegal = true;
                    break;
                }
                seen_point = true;
                needs_digit = true;
            } else if c.is_ascii_digit() {
                self.advance();
                needs_digit = false;
            } else {
                break;
            }
        }

        let text = self.lexeme();
        let kind = if illegal || needs_digit {
            TokenKind::Illegal(text)
        } else if seen_point {
            TokenKind::Decimal(text)
        } else {
            TokenKind::Integer(text)
        };
        self.make_token(kind)
    }

    /// Scans a double-quoted string literal.
    ///
    /// `\\`, `\"` and `\*` drop the backslash; any other backslash is kept.
    /// An unescaped `*` becomes a wildcard.
    fn scan_string(&mut self) -> Token {
        self.advance(); // consume opening quote
        let mut value = Pattern::new();

        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    return self.make_token(TokenKind::String(value));
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(c @ ('\\' | '"' | '*')) => {
                            self.advance();
                            value.push_char(c);
                        }
                        _ => value.push_char('\\'),
                    }
                }
                Some('*') => {
                    self.advance();
                    value.push_wildcard();
                }
                Some(c) if is_printable(c) => {
                    self.advance();
                    value.push_char(c);
                }
                Some(_) => {
                    self.advance();
                    return self.make_token(TokenKind::Illegal(value.text()));
                }
                None => {
                    return self.make_token(TokenKind::Illegal(value.text()));
                }
            }
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Token::new(TokenKind::Eof, Span::at(self.pos));
        };

        match c {
            '(' | ')' | ',' => {
                self.advance();
                let kind = match c {
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    _ => TokenKind::Comma,
                };
                self.make_token(kind)
            }
            '"' => self.scan_string(),
            c if c.is_ascii_digit() || c == '.' => self.scan_number(),
            c if c.is_alphabetic() => self.scan_identifier(),
            c => {
                self.advance();
                self.make_token(TokenKind::Illegal(c.to_string()))
            }
        }
    }

    /// Tokenizes the entire input and returns all tokens, the final
    /// [`TokenKind::Eof`] included.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

/// Characters that may follow the first letter of an identifier.
pub(crate) fn is_identifier_continue(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Characters allowed verbatim inside a string: the ASCII space plus any
/// letter, mark, number, punctuation or symbol.
fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
}
