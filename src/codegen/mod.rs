//! Code Generation module
//!
//! Lowers an expression tree into x86-64 AT&T assembly for a stack-based
//! evaluation. The program defines one global entry label and returns the
//! computed value in `%rax`.

mod emitter;
mod expr;

pub use emitter::Emitter;

use crate::ast::{Expr, Spanned};
use crate::config::CodegenConfig;

/// Register holding every intermediate result
pub const PRIMARY: &str = "%rax";
/// Register receiving the right operand before a combine step
pub const SECONDARY: &str = "%rdi";

/// Internal consistency failure in the generator, never caused by input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Pushes and pops did not cancel out over the whole program
    UnbalancedStack { depth: i64 },
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodegenError::UnbalancedStack { depth } => {
                write!(f, "stack depth is {} at end of generation, expected 0", depth)
            }
        }
    }
}

impl std::error::Error for CodegenError {}

/// Generate a complete program with the default layout
pub fn generate(expr: &Spanned<Expr>) -> Result<String, CodegenError> {
    generate_with_config(expr, &CodegenConfig::default())
}

pub fn generate_with_config(
    expr: &Spanned<Expr>,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    let mut emitter = Emitter::new(config);

    emitter.emit_directive(".global", &config.entry_symbol);
    emitter.emit_label(&config.entry_symbol);
    expr::generate_expr(expr, &mut emitter);
    emitter.emit_inst("ret", "");

    emitter.finish()
}
