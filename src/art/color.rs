use crate::art::remap::lerp;
use crate::error::{ArtError, Result};

/// Maps a value in `[-1, 1]` to a channel intensity in `[0, 255]`.
///
/// Out-of-range input is not clamped: the result can fall outside `[0, 255]`.
pub fn quantize(val: f64) -> i64 {
    lerp(val, -1.0, 1.0, 0.0, 255.0).floor() as i64
}

/// Quantizes `val` and narrows it to a pixel byte.
///
/// A result outside `[0, 255]` means an expression left its range and is
/// reported as [`ArtError::ChannelOutOfRange`].
pub fn channel_byte(val: f64) -> Result<u8> {
    let value = quantize(val);
    u8::try_from(value).map_err(|_| ArtError::ChannelOutOfRange { value })
}
