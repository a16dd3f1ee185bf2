//! Parser for arithmetic expressions
//!
//! A recursive descent parser that builds an AST from tokens. The parser
//! holds a cursor into the token slice; each production advances it past
//! what it consumed, so no production ever backtracks.

mod error;
mod expr;

pub use error::{ParseError, ParseErrorKind, ParseResult};

use crate::ast::{Expr, Span, Spanned};
use crate::lexer::{SpannedToken, Token};

/// Most parentheses and signs open at once
pub const MAX_NESTING: usize = 256;
/// Most levels an accepted expression tree may have
pub const MAX_HEIGHT: usize = 1024;

/// The expression parser
pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
    /// Parentheses and signs currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser
    pub fn new(tokens: &'a [SpannedToken]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse one complete expression; anything left before `Eof` is an error
    pub fn parse(tokens: &'a [SpannedToken]) -> ParseResult<Spanned<Expr>> {
        let mut parser = Parser::new(tokens);
        let expr = parser.parse_expr()?;

        if !parser.at_eof() {
            return Err(ParseError::extra_token(
                parser.current_span(),
                parser.peek().clone(),
            ));
        }

        Ok(expr)
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    // === Token navigation ===

    /// Peek at the current token; running off the end reads as `Eof`
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map_or(&Token::Eof, |t| &t.token)
    }

    /// Advance to the next token
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Check if the current token matches
    fn check(&self, expected: &Token) -> bool {
        self.peek() == expected
    }

    /// Consume the current token if it matches
    fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Open one nesting level at the current token
    fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::nesting_too_deep(self.current_span()));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn at_eof(&self) -> bool {
        self.check(&Token::Eof)
    }

    /// Get the span of the current token
    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|t| t.span)
            .unwrap_or_else(|| {
                // EOF span - use end of last token or 0
                self.tokens
                    .last()
                    .map(|t| Span::point(t.span.end))
                    .unwrap_or_default()
            })
    }

    /// Get the span of the previous token
    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::default()
        }
    }
}
