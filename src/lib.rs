//! exprc - compiles an arithmetic expression to x86-64 assembly
//!
//! The pipeline is `lex` -> `Parser::parse` -> `codegen::generate`. The
//! emitted program evaluates the expression on the machine stack and
//! returns the result in `%rax`.

pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod machine;
pub mod parser;

// Re-export commonly used types
pub use ast::{Expr, Span, Spanned};
pub use config::CodegenConfig;
pub use error::CompileError;
pub use lexer::lex;
pub use parser::Parser;

/// Compile an expression with the default output layout
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with_config(source, &CodegenConfig::default())
}

/// Compile an expression with a custom output layout
pub fn compile_with_config(source: &str, config: &CodegenConfig) -> Result<String, CompileError> {
    let tokens = lex(source)?;
    let ast = Parser::parse(&tokens)?;
    Ok(codegen::generate_with_config(&ast, config)?)
}
