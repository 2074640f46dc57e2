use randart::{BinaryOp, ChannelTriple, Expr, UnaryOp, Variable};

pub fn x() -> Expr {
    Expr::Leaf(Variable::X)
}

pub fn y() -> Expr {
    Expr::Leaf(Variable::Y)
}

/// Trees with easily predicted output:
/// red follows x, green follows y, blue is their product.
pub fn gradient_channels() -> ChannelTriple {
    ChannelTriple {
        red: x(),
        green: y(),
        blue: Expr::binary(BinaryOp::Product, x(), y()),
    }
}

/// Channels that evaluate to a constant everywhere.
/// Red is cos(0) = 1, green is sin(0) = 0, blue is cos(π) = -1.
pub fn constant_channels() -> ChannelTriple {
    ChannelTriple {
        red: Expr::unary(UnaryOp::CosineScaled { k: 0 }, x()),
        green: Expr::unary(UnaryOp::SineScaled { k: 0 }, y()),
        blue: Expr::unary(
            UnaryOp::Cosine,
            Expr::unary(UnaryOp::CosineScaled { k: 0 }, x()),
        ),
    }
}

/// Creates an empty temporary directory for debug output.
pub fn create_debug_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp directory")
}
