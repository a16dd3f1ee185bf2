//! Lexer for arithmetic expressions
//!
//! Uses logos for tokenization. The token list always ends with a
//! zero-length [`Token::Eof`] positioned at the end of the input.

use std::fmt;

use logos::Logos;

use crate::ast::Span;

/// Expression tokens
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
pub enum Token {
    // === Punctuation ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // === Literals ===
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),

    /// End of input, appended by [`lex`]
    Eof,
}

impl Token {
    pub fn is_punct(&self) -> bool {
        !matches!(self, Token::Integer(_) | Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Integer(n) => write!(f, "number {}", n),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its span in the source
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// Source text the token was scanned from (empty for `Eof`)
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}

/// Lex source code into tokens
pub fn lex(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        match result {
            Ok(token) => {
                tokens.push(SpannedToken {
                    token,
                    span: Span::new(range.start, range.end),
                });
            }
            Err(()) => return Err(LexError::at(source, range)),
        }
    }

    tokens.push(SpannedToken {
        token: Token::Eof,
        span: Span::point(source.len()),
    });

    Ok(tokens)
}

/// An error that occurred during lexing
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// Character that starts no token
    InvalidToken(char),
    /// Digit run that does not fit in a 64-bit signed integer
    NumberOutOfRange(String),
}

impl LexError {
    fn at(source: &str, range: std::ops::Range<usize>) -> Self {
        let start = range.start;
        let slice = source.get(range).unwrap_or("");
        if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            return Self {
                span: Span::new(start, start + slice.len()),
                kind: LexErrorKind::NumberOutOfRange(slice.to_string()),
            };
        }

        let ch = source[start..].chars().next().unwrap_or('\0');
        Self {
            span: Span::new(start, start + ch.len_utf8()),
            kind: LexErrorKind::InvalidToken(ch),
        }
    }

    /// Short message without source context
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::InvalidToken(_) => "invalid token".to_string(),
            LexErrorKind::NumberOutOfRange(digits) => format!("number out of range: {}", digits),
        }
    }

    /// Format error with the input echoed and a caret under the offending column
    pub fn format_with_source(&self, source: &str) -> String {
        self.span.render_caret(source, &self.message())
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::InvalidToken(ch) => {
                write!(f, "invalid token {:?} at {}", ch, self.span.start)
            }
            LexErrorKind::NumberOutOfRange(_) => {
                write!(f, "{} at {}", self.message(), self.span.start)
            }
        }
    }
}

impl std::error::Error for LexError {}
