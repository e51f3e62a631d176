use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::SampleError;
use crate::models::{ColorSample, GridSize};

/// A decoded RGBA bitmap, held only for the duration of one conversion.
#[derive(Debug, Clone)]
pub struct SourceBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SourceBitmap {
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at pixel coordinates. Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> ColorSample {
        let idx = ((y * self.width + x) * 4) as usize;
        ColorSample::from_rgba8(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }
}

/// Decode image bytes into a bitmap at exactly the grid's pixel
/// dimensions, cover-fitted.
///
/// Cover fit: the source is center-cropped to the grid's aspect ratio and
/// then resized, so an image wider than the grid loses its left and right
/// edges rather than being squashed. A source that is exactly the grid's
/// aspect is only resized; a source already at the grid's pixel dimensions
/// passes through untouched.
pub fn decode_cover(bytes: &[u8], grid: GridSize) -> Result<SourceBitmap, SampleError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| SampleError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (src_w, src_h) = rgba.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(SampleError::EmptySource);
    }
    tracing::debug!(width = src_w, height = src_h, grid = %grid, "Decoded source image");

    let img_aspect = src_w as f64 / src_h as f64;
    let grid_aspect = grid.aspect();

    let cropped = if img_aspect > grid_aspect {
        // Wider than the grid: fit by height, center-crop horizontally.
        let crop_w = ((src_h as f64 * grid_aspect).round() as u32).clamp(1, src_w);
        let x0 = (src_w - crop_w) / 2;
        imageops::crop_imm(&rgba, x0, 0, crop_w, src_h).to_image()
    } else if img_aspect < grid_aspect {
        // Taller than the grid: fit by width, center-crop vertically.
        let crop_h = ((src_w as f64 / grid_aspect).round() as u32).clamp(1, src_h);
        let y0 = (src_h - crop_h) / 2;
        imageops::crop_imm(&rgba, 0, y0, src_w, crop_h).to_image()
    } else {
        rgba
    };

    let scaled = if cropped.dimensions() == (grid.width, grid.height) {
        cropped
    } else {
        imageops::resize(&cropped, grid.width, grid.height, FilterType::Triangle)
    };

    Ok(SourceBitmap::from_rgba(scaled))
}
