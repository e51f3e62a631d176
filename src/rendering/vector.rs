//! Vector (SVG) exporter.
//!
//! Emits one `<circle>` per dot at a fixed quality multiplier, with an
//! optional full-canvas white background rectangle. Colors are `#rrggbb`
//! hex; per-dot opacity goes through `fill-opacity`.

use std::path::Path;

use crate::error::ExportError;
use crate::models::DotGrid;
use crate::rendering::GridGeometry;

/// 2x for SVG coordinate precision.
const QUALITY_MULTIPLIER: u32 = 2;
/// Outer margin in base units, multiplier-scaled.
const EXPORT_PADDING: u32 = 2;

/// Render the grid to an SVG document.
pub fn export_svg(grid: &DotGrid, transparent: bool) -> Result<String, ExportError> {
    if grid.is_empty() {
        return Err(ExportError::EmptyGrid);
    }
    let size = grid.size();
    let geom = GridGeometry::scaled(size, QUALITY_MULTIPLIER, EXPORT_PADDING);
    let width = geom.canvas_width(size);
    let height = geom.canvas_height(size);

    // ~90 bytes per circle element.
    let mut svg = String::with_capacity(grid.len() * 90 + 128);
    svg.push_str(&format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    ));

    if !transparent {
        svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    }

    let radius = fmt_coord(geom.radius());
    for dot in grid.iter() {
        let cx = fmt_coord(geom.dot_center(dot.x));
        let cy = fmt_coord(geom.dot_center(dot.y));
        svg.push_str(&format!(
            r##"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="#{hex}" fill-opacity="{opacity}"/>"##,
            hex = dot.color.to_hex(),
            opacity = fmt_coord(dot.color.a),
        ));
    }

    svg.push_str("</svg>");
    tracing::debug!(
        grid = %size,
        dots = grid.len(),
        bytes = svg.len(),
        transparent,
        "Generated SVG document"
    );
    Ok(svg)
}

/// Render the grid and write the SVG document to `path`.
pub fn write_svg(path: &Path, grid: &DotGrid, transparent: bool) -> Result<(), ExportError> {
    let svg = export_svg(grid, transparent)?;
    std::fs::write(path, svg)?;
    Ok(())
}

/// Format a coordinate or opacity compactly: three decimals, trailing
/// zeros (and a bare point) trimmed, so whole numbers print as integers.
fn fmt_coord(value: f32) -> String {
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
