mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from randart for tests
pub use randart::{
    ArtError, ArtGenerator, BinaryOp, Channel, ChannelTriple, Expr, Raster, UnaryOp, Variable,
};
