//! Expression productions
//!
//! ```text
//! expr    := mul ( ('+' | '-') mul )*
//! mul     := unary ( ('*' | '/') unary )*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Internally each production also returns the height of the tree it
//! built, so no tree deeper than [`MAX_HEIGHT`] ever leaves the parser.

use crate::ast::{BinaryOp, Expr, Span, Spanned, UnaryOp};
use crate::lexer::Token;

use super::error::{ParseError, ParseResult};
use super::{MAX_HEIGHT, Parser};

/// A node and the number of levels below it
type Parsed = (Spanned<Expr>, usize);

impl Parser<'_> {
    /// Parse an expression
    pub fn parse_expr(&mut self) -> ParseResult<Spanned<Expr>> {
        self.expr().map(|(node, _)| node)
    }

    fn expr(&mut self) -> ParseResult<Parsed> {
        let mut lhs = self.mul()?;

        loop {
            let op = match self.peek() {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            let at = self.current_span();
            self.advance();

            let rhs = self.mul()?;
            lhs = binary(lhs, op, rhs, at)?;
        }
    }

    fn mul(&mut self) -> ParseResult<Parsed> {
        let mut lhs = self.unary()?;

        loop {
            let op = match self.peek() {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            let at = self.current_span();
            self.advance();

            let rhs = self.unary()?;
            lhs = binary(lhs, op, rhs, at)?;
        }
    }

    fn unary(&mut self) -> ParseResult<Parsed> {
        let start = self.current_span();

        // '+' is dropped; '-' always wraps, even around a literal
        if self.check(&Token::Plus) {
            self.enter()?;
            self.advance();
            let operand = self.unary();
            self.leave();
            return operand;
        }

        if self.check(&Token::Minus) {
            self.enter()?;
            self.advance();
            let operand = self.unary();
            self.leave();

            let (operand, height) = operand?;
            let height = checked_height(height + 1, start)?;
            let span = start.merge(operand.span);
            return Ok((Spanned::new(Expr::unary(UnaryOp::Neg, operand), span), height));
        }

        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Parsed> {
        let start = self.current_span();

        match self.peek().clone() {
            Token::LParen => {
                self.enter()?;
                self.advance();
                let inner = self.expr();
                self.leave();

                let (inner, height) = inner?;
                if !self.eat(&Token::RParen) {
                    return Err(ParseError::expected_closing_paren(
                        self.current_span(),
                        self.peek().clone(),
                    ));
                }
                let span = start.merge(self.previous_span());
                Ok((Spanned::new(inner.node, span), height))
            }
            Token::Integer(n) => {
                self.advance();
                Ok((Spanned::new(Expr::number(n), start), 0))
            }
            found => Err(ParseError::expected_primary(start, found)),
        }
    }
}

fn binary(lhs: Parsed, op: BinaryOp, rhs: Parsed, at: Span) -> ParseResult<Parsed> {
    let height = checked_height(lhs.1.max(rhs.1) + 1, at)?;
    let span = lhs.0.span.merge(rhs.0.span);
    Ok((Spanned::new(Expr::binary(lhs.0, op, rhs.0), span), height))
}

fn checked_height(height: usize, at: Span) -> ParseResult<usize> {
    if height > MAX_HEIGHT {
        return Err(ParseError::nesting_too_deep(at));
    }
    Ok(height)
}
