//! Parse error types

use crate::ast::Span;
use crate::lexer::Token;

/// A parse error
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

/// The kind of parse error
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A group was opened but the closing parenthesis is missing
    ExpectedClosingParen { found: Token },
    /// Neither a number nor '(' where an operand must start
    ExpectedPrimary { found: Token },
    /// Tokens left over after a complete expression
    ExtraToken { found: Token },
    /// Parentheses, signs or operator chains nested past the parser's limits
    NestingTooDeep,
}

impl ParseError {
    pub fn expected_closing_paren(span: Span, found: Token) -> Self {
        Self {
            span,
            kind: ParseErrorKind::ExpectedClosingParen { found },
        }
    }

    pub fn expected_primary(span: Span, found: Token) -> Self {
        Self {
            span,
            kind: ParseErrorKind::ExpectedPrimary { found },
        }
    }

    pub fn extra_token(span: Span, found: Token) -> Self {
        Self {
            span,
            kind: ParseErrorKind::ExtraToken { found },
        }
    }

    pub fn nesting_too_deep(span: Span) -> Self {
        Self {
            span,
            kind: ParseErrorKind::NestingTooDeep,
        }
    }

    /// Short message without source context
    pub fn message(&self) -> &'static str {
        match &self.kind {
            ParseErrorKind::ExpectedClosingParen { .. } => "expected ')'",
            ParseErrorKind::ExpectedPrimary { .. } => "expected a number or '('",
            ParseErrorKind::ExtraToken { .. } => "extra token",
            ParseErrorKind::NestingTooDeep => "expression nests too deeply",
        }
    }

    /// The token found at the error position, when it explains the error
    pub fn found(&self) -> Option<&Token> {
        match &self.kind {
            ParseErrorKind::ExpectedClosingParen { found }
            | ParseErrorKind::ExpectedPrimary { found }
            | ParseErrorKind::ExtraToken { found } => Some(found),
            ParseErrorKind::NestingTooDeep => None,
        }
    }

    /// Format error with the input echoed and a caret under the offending column
    pub fn format_with_source(&self, source: &str) -> String {
        self.span.render_caret(source, self.message())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found() {
            Some(found) => write!(
                f,
                "{}, found {} at {}..{}",
                self.message(),
                found,
                self.span.start,
                self.span.end
            ),
            None => write!(f, "{} at {}..{}", self.message(), self.span.start, self.span.end),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;
