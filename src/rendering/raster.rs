//! Raster (PNG) exporter.
//!
//! Draws the dot grid onto an offscreen pixmap at a fixed quality
//! multiplier and encodes it as RGBA PNG. Unless transparency is
//! requested, a full-canvas white fill precedes all dot drawing; with
//! transparency, per-dot alpha passes through unmodified so export
//! fidelity matches on-screen compositing.

use std::io::Cursor;
use std::path::Path;

use tiny_skia::{Color, Pixmap};

use crate::error::{ExportError, RenderError};
use crate::models::DotGrid;
use crate::rendering::{draw_dots, GridGeometry};

/// 4x resolution for crisp output.
const QUALITY_MULTIPLIER: u32 = 4;
/// Outer margin in base units, multiplier-scaled.
const EXPORT_PADDING: u32 = 2;

/// Render the grid to PNG bytes.
pub fn export_png(grid: &DotGrid, transparent: bool) -> Result<Vec<u8>, ExportError> {
    if grid.is_empty() {
        return Err(ExportError::EmptyGrid);
    }
    let size = grid.size();
    let geom = GridGeometry::scaled(size, QUALITY_MULTIPLIER, EXPORT_PADDING);
    let mut pixmap = Pixmap::new(geom.canvas_width(size), geom.canvas_height(size))
        .ok_or(RenderError::PixmapAllocation)?;

    if !transparent {
        pixmap.fill(Color::WHITE);
    }
    draw_dots(
        &mut pixmap,
        grid,
        geom.diameter as f32,
        geom.gap as f32,
        geom.padding as f32,
    );

    let bytes = encode_rgba_png(&pixmap)?;
    tracing::info!(
        grid = %size,
        bytes = bytes.len(),
        transparent,
        "Exported PNG"
    );
    Ok(bytes)
}

/// Render the grid and write the PNG to `path`.
pub fn write_png(path: &Path, grid: &DotGrid, transparent: bool) -> Result<(), ExportError> {
    let bytes = export_png(grid, transparent)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Encode a pixmap as 8-bit RGBA PNG.
///
/// tiny-skia stores premultiplied alpha; PNG wants straight alpha, so
/// each pixel is demultiplied first.
fn encode_rgba_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
