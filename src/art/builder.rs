use rand::Rng;

use crate::error::{ArtError, Result};
use crate::models::{BinaryOp, Expr, Primitive, UnaryOp, Variable};

/// Exclusive upper bound for the `k` of scaled cosine/sine nodes.
pub const SCALE_LIMIT: u32 = 10;

/// Builds a random expression whose depth is drawn uniformly from `[min_depth, max_depth)`.
///
/// Every root-to-leaf path of the result has exactly the drawn depth.
pub fn build<R: Rng + ?Sized>(rng: &mut R, min_depth: u32, max_depth: u32) -> Result<Expr> {
    if min_depth >= max_depth {
        return Err(ArtError::InvalidDepthRange {
            min: min_depth,
            max: max_depth,
        });
    }
    let depth = rng.random_range(min_depth..max_depth);
    Ok(generate(rng, depth))
}

/// Builds a random expression of exactly `depth` levels.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, depth: u32) -> Expr {
    if depth == 0 {
        return Expr::Leaf(random_variable(rng));
    }

    // All ten primitives are equally likely, whatever their arity
    let primitive = Primitive::ALL[rng.random_range(0..Primitive::ALL.len())];
    match instantiate(rng, primitive) {
        Operator::Unary(op) => Expr::unary(op, generate(rng, depth - 1)),
        Operator::Binary(op) => {
            let left = generate(rng, depth - 1);
            let right = generate(rng, depth - 1);
            Expr::binary(op, left, right)
        }
    }
}

enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

fn random_variable<R: Rng + ?Sized>(rng: &mut R) -> Variable {
    if rng.random_bool(0.5) {
        Variable::X
    } else {
        Variable::Y
    }
}

/// Turns a primitive tag into a concrete operator, drawing `k` for the scaled ones.
fn instantiate<R: Rng + ?Sized>(rng: &mut R, primitive: Primitive) -> Operator {
    match primitive {
        Primitive::Cosine => Operator::Unary(UnaryOp::Cosine),
        Primitive::Sine => Operator::Unary(UnaryOp::Sine),
        Primitive::SqrtComplement => Operator::Unary(UnaryOp::SqrtComplement),
        Primitive::AbsoluteValue => Operator::Unary(UnaryOp::AbsoluteValue),
        Primitive::CosineScaled => Operator::Unary(UnaryOp::CosineScaled {
            k: rng.random_range(0..SCALE_LIMIT),
        }),
        Primitive::SineScaled => Operator::Unary(UnaryOp::SineScaled {
            k: rng.random_range(0..SCALE_LIMIT),
        }),
        Primitive::Product => Operator::Binary(BinaryOp::Product),
        Primitive::Average => Operator::Binary(BinaryOp::Average),
        Primitive::SelectX => Operator::Binary(BinaryOp::SelectX),
        Primitive::SelectY => Operator::Binary(BinaryOp::SelectY),
    }
}
