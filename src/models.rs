use std::fmt;

/// One of the two inputs an expression is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    X,
    Y,
}

/// Operators taking a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// cos(πa)
    Cosine,
    /// sin(πa)
    Sine,
    /// sqrt(1 - a²)
    SqrtComplement,
    AbsoluteValue,
    /// cos(πak), with `k` fixed when the node is built
    CosineScaled { k: u32 },
    /// sin(πak), with `k` fixed when the node is built
    SineScaled { k: u32 },
}

/// Operators taking two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Product,
    Average,
    /// Passes the left argument through
    SelectX,
    /// Passes the right argument through
    SelectY,
}

/// Number of arguments a primitive consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Operator tags the builder draws from, without any per-node parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Cosine,
    Sine,
    SqrtComplement,
    AbsoluteValue,
    CosineScaled,
    SineScaled,
    Product,
    Average,
    SelectX,
    SelectY,
}

impl Primitive {
    pub const ALL: [Primitive; 10] = [
        Primitive::Cosine,
        Primitive::Sine,
        Primitive::SqrtComplement,
        Primitive::AbsoluteValue,
        Primitive::CosineScaled,
        Primitive::SineScaled,
        Primitive::Product,
        Primitive::Average,
        Primitive::SelectX,
        Primitive::SelectY,
    ];

    pub fn arity(self) -> Arity {
        match self {
            Primitive::Cosine
            | Primitive::Sine
            | Primitive::SqrtComplement
            | Primitive::AbsoluteValue
            | Primitive::CosineScaled
            | Primitive::SineScaled => Arity::Unary,
            Primitive::Product | Primitive::Average | Primitive::SelectX | Primitive::SelectY => {
                Arity::Binary
            }
        }
    }
}

/// A node of a random expression tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Leaf(Variable),
    Unary {
        op: UnaryOp,
        child: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, child: Expr) -> Self {
        Expr::Unary {
            op,
            child: Box::new(child),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Longest root-to-leaf path, counted in edges. A lone leaf has depth 0.
    pub fn depth(&self) -> u32 {
        match self {
            Expr::Leaf(_) => 0,
            Expr::Unary { child, .. } => 1 + child.depth(),
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::Unary { child, .. } => 1 + child.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::X => write!(f, "x"),
            Variable::Y => write!(f, "y"),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Cosine => write!(f, "cos_pi"),
            UnaryOp::Sine => write!(f, "sin_pi"),
            UnaryOp::SqrtComplement => write!(f, "sqrt_diff"),
            UnaryOp::AbsoluteValue => write!(f, "abs"),
            UnaryOp::CosineScaled { k } => write!(f, "cos_pi_k{}", k),
            UnaryOp::SineScaled { k } => write!(f, "sin_pi_k{}", k),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Product => write!(f, "prod"),
            BinaryOp::Average => write!(f, "avg"),
            BinaryOp::SelectX => write!(f, "sel_x"),
            BinaryOp::SelectY => write!(f, "sel_y"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Leaf(var) => write!(f, "{}", var),
            Expr::Unary { op, child } => write!(f, "{}({})", op, child),
            Expr::Binary { op, left, right } => write!(f, "{}({}, {})", op, left, right),
        }
    }
}

/// Color channels, in pixel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// One independently built expression per color channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTriple {
    pub red: Expr,
    pub green: Expr,
    pub blue: Expr,
}

impl ChannelTriple {
    pub fn get(&self, channel: Channel) -> &Expr {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}
