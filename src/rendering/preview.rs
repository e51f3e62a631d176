//! On-screen preview renderer.
//!
//! Renders at native size unless that would overflow the viewport, in
//! which case diameter and gap shrink by a uniform scale factor with
//! floors so dots stay visible at extreme grid sizes. Viewport resize is
//! an external event: the host calls [`PreviewRenderer::render`] again
//! with the new width.

use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::models::{DotGrid, GridSize};
use crate::rendering::{draw_dots, GridGeometry};

/// Smallest on-screen dot diameter, in pixels.
pub const MIN_DIAMETER: f32 = 2.0;
/// Smallest on-screen gap, in pixels.
pub const MIN_GAP: f32 = 1.0;

/// Geometry resolved against a concrete viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    pub diameter: f32,
    pub gap: f32,
    /// The applied scale factor; 1.0 when rendering at native size.
    pub scale: f32,
}

impl PreviewLayout {
    pub fn canvas_width(&self, grid: GridSize) -> f32 {
        grid.width as f32 * (self.diameter + self.gap) - self.gap
    }

    pub fn canvas_height(&self, grid: GridSize) -> f32 {
        grid.height as f32 * (self.diameter + self.gap) - self.gap
    }
}

/// Preview renderer for one grid size. No padding: the host controls
/// margins around the preview.
#[derive(Debug, Clone, Copy)]
pub struct PreviewRenderer {
    size: GridSize,
}

impl PreviewRenderer {
    pub fn new(size: GridSize) -> Self {
        Self { size }
    }

    /// Resolve geometry for a viewport width.
    pub fn fit(&self, viewport_width: f32) -> PreviewLayout {
        let geom = GridGeometry::base(self.size);
        let native = geom.canvas_width(self.size) as f32;
        if native <= viewport_width {
            return PreviewLayout {
                diameter: geom.diameter as f32,
                gap: geom.gap as f32,
                scale: 1.0,
            };
        }
        let scale = viewport_width / native;
        PreviewLayout {
            diameter: (geom.diameter as f32 * scale).max(MIN_DIAMETER),
            gap: (geom.gap as f32 * scale).max(MIN_GAP),
            scale,
        }
    }

    /// Render the dots to an RGBA pixmap sized for the viewport, ready
    /// for the host UI to blit.
    pub fn render(&self, grid: &DotGrid, viewport_width: f32) -> Result<Pixmap, RenderError> {
        debug_assert_eq!(grid.size(), self.size, "grid was sampled at another size");
        let layout = self.fit(viewport_width);
        let width = layout.canvas_width(self.size).ceil().max(1.0) as u32;
        let height = layout.canvas_height(self.size).ceil().max(1.0) as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        draw_dots(&mut pixmap, grid, layout.diameter, layout.gap, 0.0);
        tracing::debug!(width, height, scale = layout.scale, "Rendered preview");
        Ok(pixmap)
    }
}
