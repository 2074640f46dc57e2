use std::path::PathBuf;

use crate::models::UnaryOp;

pub type Result<T> = std::result::Result<T, ArtError>;

#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("input interval has zero width (both ends are {lo})")]
    InvalidInterval { lo: f64 },
    #[error("depth range [{min}, {max}) is empty")]
    InvalidDepthRange { min: u32, max: u32 },
    #[error("{op} received {value}, outside its domain")]
    DomainViolation { op: UnaryOp, value: f64 },
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("channel value {value} does not fit in [0, 255]")]
    ChannelOutOfRange { value: i64 },
    #[error("debug directory is not empty: {}", .path.display())]
    DebugDirNotEmpty { path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
