//! Image sampling: decode a user-supplied image and sample it onto a
//! fixed-size logical grid, one color per cell.

mod decode;
mod sample;

pub use decode::{decode_cover, SourceBitmap};
pub use sample::sample;

use crate::error::SampleError;
use crate::models::{DotGrid, GridSize};

/// Decode + sample in one call: the conversion entry point.
///
/// The decoded bitmap is transient; only the dot sequence survives.
pub fn convert(bytes: &[u8], grid: GridSize) -> Result<DotGrid, SampleError> {
    let bitmap = decode_cover(bytes, grid)?;
    Ok(sample(&bitmap, grid))
}
