//! Expression AST nodes

use super::span::Spanned;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Source symbol of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Unary operators
///
/// Unary `+` never reaches the tree; only negation is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation: -x
    Neg,
}

/// An arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal
    Number(i64),

    /// Binary operation: a + b
    Binary {
        left: Box<Spanned<Expr>>,
        op: BinaryOp,
        right: Box<Spanned<Expr>>,
    },

    /// Unary operation: -x
    Unary {
        op: UnaryOp,
        operand: Box<Spanned<Expr>>,
    },
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn binary(left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Spanned<Expr>) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Fully parenthesized rendering, handy for checking tree shape
    pub fn to_sexpr(&self) -> String {
        match self {
            Expr::Number(n) => n.to_string(),
            Expr::Binary { left, op, right } => format!(
                "({} {} {})",
                op.symbol(),
                left.node.to_sexpr(),
                right.node.to_sexpr()
            ),
            Expr::Unary {
                op: UnaryOp::Neg,
                operand,
            } => format!("(neg {})", operand.node.to_sexpr()),
        }
    }
}
