//! Expression Evaluation
//!
//! Computes the value the generated program returns, using the same
//! 64-bit two's complement arithmetic as the target. Division faults that
//! would trap on the target are reported as errors.

use crate::ast::{BinaryOp, Expr, Span, Spanned, UnaryOp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Right operand of '/' evaluated to zero
    DivisionByZero { span: Span },
    /// i64::MIN / -1, which overflows the quotient
    DivisionOverflow { span: Span },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivisionByZero { span } => {
                write!(f, "division by zero at {}..{}", span.start, span.end)
            }
            EvalError::DivisionOverflow { span } => {
                write!(f, "division overflow at {}..{}", span.start, span.end)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluate an expression tree
pub fn evaluate(expr: &Spanned<Expr>) -> Result<i64, EvalError> {
    match &expr.node {
        Expr::Number(n) => Ok(*n),
        Expr::Unary {
            op: UnaryOp::Neg,
            operand,
        } => Ok(evaluate(operand)?.wrapping_neg()),
        Expr::Binary { left, op, right } => {
            // right first, matching the generated evaluation order
            let r = evaluate(right)?;
            let l = evaluate(left)?;
            match op {
                BinaryOp::Add => Ok(l.wrapping_add(r)),
                BinaryOp::Sub => Ok(l.wrapping_sub(r)),
                BinaryOp::Mul => Ok(l.wrapping_mul(r)),
                BinaryOp::Div => {
                    if r == 0 {
                        return Err(EvalError::DivisionByZero { span: expr.span });
                    }
                    l.checked_div(r)
                        .ok_or(EvalError::DivisionOverflow { span: expr.span })
                }
            }
        }
    }
}
