//! Abstract Syntax Tree (AST) for arithmetic expressions
//!
//! Every node is exclusively owned by its parent; the root is handed
//! from the parser to the code generator.

mod expr;
mod span;

pub use expr::{BinaryOp, Expr, UnaryOp};
pub use span::{Span, Spanned};
