//! Expression code generation
//!
//! Post-order walk: every call leaves its value in `%rax`. A binary node
//! evaluates the right operand first and parks it on the stack, then
//! evaluates the left operand and pops the right one into `%rdi`, so the
//! combine step always computes `%rax <op> %rdi` as `left <op> right`.

use crate::ast::{BinaryOp, Expr, Spanned, UnaryOp};

use super::{Emitter, PRIMARY, SECONDARY};

pub(super) fn generate_expr(expr: &Spanned<Expr>, emitter: &mut Emitter) {
    match &expr.node {
        Expr::Number(value) => {
            emitter.emit_inst("mov", &format!("${}, {}", value, PRIMARY));
        }
        Expr::Unary {
            op: UnaryOp::Neg,
            operand,
        } => {
            generate_expr(operand, emitter);
            emitter.emit_inst("neg", PRIMARY);
        }
        Expr::Binary { left, op, right } => {
            generate_expr(right, emitter);
            emitter.push(PRIMARY);
            generate_expr(left, emitter);
            emitter.pop(SECONDARY);
            generate_binary(*op, emitter);
        }
    }
}

fn generate_binary(op: BinaryOp, emitter: &mut Emitter) {
    emitter.emit_comment(op.symbol());

    let operands = format!("{}, {}", SECONDARY, PRIMARY);
    match op {
        BinaryOp::Add => emitter.emit_inst("add", &operands),
        BinaryOp::Sub => emitter.emit_inst("sub", &operands),
        BinaryOp::Mul => emitter.emit_inst("imul", &operands),
        BinaryOp::Div => {
            // sign-extend %rax into %rdx:%rax, quotient truncates toward zero
            emitter.emit_inst("cqo", "");
            emitter.emit_inst("idiv", SECONDARY);
        }
    }
}
