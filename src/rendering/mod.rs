//! Renderers: on-screen preview plus PNG and SVG exporters.
//!
//! All three consume the same [`DotGrid`](crate::models::DotGrid) and
//! compute layout exclusively through [`GridGeometry`], each at its own
//! resolution multiplier.

pub mod geometry;
pub mod preview;
pub mod raster;
pub mod vector;

pub use geometry::{dot_diameter, dot_gap, GridGeometry};
pub use preview::{PreviewLayout, PreviewRenderer};
pub use raster::{export_png, write_png};
pub use vector::{export_svg, write_svg};

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::models::{DotGrid, GridSize};

/// Bitmap or vector output, for filename construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Download filename shared by both exporters: `dot-grid-{W}x{H}.{ext}`.
pub fn export_filename(grid: GridSize, format: ExportFormat) -> String {
    format!(
        "dot-grid-{}x{}.{}",
        grid.width,
        grid.height,
        format.extension()
    )
}

/// Draw one anti-aliased filled circle per dot onto the pixmap.
///
/// Layout math matches `GridGeometry`: each dot's bounding square starts
/// at `padding + cell * (diameter + gap)` per axis. Parameters are f32 so
/// the preview can pass fractionally scaled geometry.
pub(crate) fn draw_dots(
    pixmap: &mut Pixmap,
    grid: &DotGrid,
    diameter: f32,
    gap: f32,
    padding: f32,
) {
    let pitch = diameter + gap;
    let radius = diameter / 2.0;
    let mut paint = Paint::default();
    paint.anti_alias = true;

    for dot in grid.iter() {
        let cx = padding + dot.x as f32 * pitch + radius;
        let cy = padding + dot.y as f32 * pitch + radius;
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            continue;
        };
        paint.set_color(dot.color.to_color());
        pixmap.as_mut().fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
