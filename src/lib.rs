pub mod art;
pub mod background;
pub mod error;
pub mod models;
pub mod raster;

pub use art::{ArtGenerator, Artwork, build_channels, synthesize, synthesize_with};
pub use art::builder::build;
pub use art::color::quantize;
pub use art::eval::evaluate;
pub use art::remap::remap;
pub use background::BackgroundSetter;
pub use error::{ArtError, Result};
pub use models::{BinaryOp, Channel, ChannelTriple, Expr, UnaryOp, Variable};
pub use raster::Raster;
