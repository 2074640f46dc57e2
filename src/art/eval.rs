use std::f64::consts::PI;

use crate::error::{ArtError, Result};
use crate::models::{BinaryOp, Expr, UnaryOp, Variable};

/// Evaluates `expr` at `(x, y)`.
///
/// Trees produced by the builder map `[-1, 1]²` into `[-1, 1]`. The only
/// failure is [`ArtError::DomainViolation`], raised when `sqrt_diff` sees
/// an argument with magnitude above 1.
pub fn evaluate(expr: &Expr, x: f64, y: f64) -> Result<f64> {
    match expr {
        Expr::Leaf(Variable::X) => Ok(x),
        Expr::Leaf(Variable::Y) => Ok(y),
        Expr::Unary { op, child } => apply_unary(*op, evaluate(child, x, y)?),
        Expr::Binary { op, left, right } => {
            let a = evaluate(left, x, y)?;
            let b = evaluate(right, x, y)?;
            Ok(apply_binary(*op, a, b))
        }
    }
}

pub fn apply_unary(op: UnaryOp, a: f64) -> Result<f64> {
    let value = match op {
        UnaryOp::Cosine => (PI * a).cos(),
        UnaryOp::Sine => (PI * a).sin(),
        UnaryOp::SqrtComplement => {
            if a.abs() > 1.0 {
                return Err(ArtError::DomainViolation { op, value: a });
            }
            (1.0 - a * a).sqrt()
        }
        UnaryOp::AbsoluteValue => a.abs(),
        UnaryOp::CosineScaled { k } => (PI * a * f64::from(k)).cos(),
        UnaryOp::SineScaled { k } => (PI * a * f64::from(k)).sin(),
    };
    Ok(value)
}

pub fn apply_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Product => a * b,
        BinaryOp::Average => 0.5 * (a + b),
        BinaryOp::SelectX => a,
        BinaryOp::SelectY => b,
    }
}
