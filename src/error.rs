//! Errors for the whole pipeline
//!
//! Stages return their own error types; this wraps them so the driver can
//! render any of them against the original input.

use crate::codegen::CodegenError;
use crate::lexer::LexError;
use crate::parser::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Wrong number of command-line arguments
    Usage(String),
    Lex(LexError),
    Parse(ParseError),
    /// Generator defect, not an input problem
    Internal(CodegenError),
}

impl CompileError {
    pub fn is_internal(&self) -> bool {
        matches!(self, CompileError::Internal(_))
    }

    /// Render for stderr; lex and parse errors point at the offending column
    pub fn format_with_source(&self, source: &str) -> String {
        match self {
            CompileError::Usage(usage) => format!("usage: {}", usage),
            CompileError::Lex(e) => e.format_with_source(source),
            CompileError::Parse(e) => e.format_with_source(source),
            CompileError::Internal(e) => format!("internal error: {}", e),
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Usage(usage) => write!(f, "usage: {}", usage),
            CompileError::Lex(e) => write!(f, "lex error: {}", e),
            CompileError::Parse(e) => write!(f, "parse error: {}", e),
            CompileError::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Usage(_) => None,
            CompileError::Lex(e) => Some(e),
            CompileError::Parse(e) => Some(e),
            CompileError::Internal(e) => Some(e),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Lex(e)
    }
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        CompileError::Parse(e)
    }
}

impl From<CodegenError> for CompileError {
    fn from(e: CodegenError) -> Self {
        CompileError::Internal(e)
    }
}
