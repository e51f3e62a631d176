//! Grid geometry: dot diameter and inter-dot gap derived from grid width.
//!
//! Every renderer computes its layout through [`GridGeometry`] so that
//! preview, PNG and SVG output stay visually consistent; a renderer only
//! chooses its resolution multiplier and padding.

use crate::models::GridSize;

/// Base dot diameter for a grid width, in discrete tiers: denser grids
/// get smaller dots to avoid overlap.
pub fn dot_diameter(grid_width: u32) -> u32 {
    if grid_width <= 32 {
        12
    } else if grid_width <= 64 {
        8
    } else {
        6
    }
}

/// Gap between adjacent dots: 20% of the diameter, floored, never below 1.
pub fn dot_gap(diameter: u32) -> u32 {
    ((diameter as f32 * 0.2) as u32).max(1)
}

/// Resolved layout parameters for one render target.
///
/// `padding` is an outer margin on all four sides; it is given in base
/// units and scaled by the multiplier alongside diameter and gap, so
/// proportions hold across resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub diameter: u32,
    pub gap: u32,
    pub padding: u32,
}

impl GridGeometry {
    /// 1x geometry with no padding, as used by the preview.
    pub fn base(grid: GridSize) -> Self {
        Self::scaled(grid, 1, 0)
    }

    /// Geometry scaled by a resolution multiplier, with padding in base units.
    pub fn scaled(grid: GridSize, multiplier: u32, padding: u32) -> Self {
        let diameter = dot_diameter(grid.width);
        Self {
            diameter: diameter * multiplier,
            gap: dot_gap(diameter) * multiplier,
            padding: padding * multiplier,
        }
    }

    /// Center-to-center distance between adjacent dots.
    pub fn pitch(&self) -> u32 {
        self.diameter + self.gap
    }

    pub fn canvas_width(&self, grid: GridSize) -> u32 {
        grid.width * self.pitch() - self.gap + 2 * self.padding
    }

    pub fn canvas_height(&self, grid: GridSize) -> u32 {
        grid.height * self.pitch() - self.gap + 2 * self.padding
    }

    /// Top-left corner of a dot's bounding square along one axis.
    pub fn dot_origin(&self, cell: u32) -> u32 {
        self.padding + cell * self.pitch()
    }

    /// Center of a dot along one axis.
    pub fn dot_center(&self, cell: u32) -> f32 {
        self.dot_origin(cell) as f32 + self.diameter as f32 / 2.0
    }

    pub fn radius(&self) -> f32 {
        self.diameter as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diameter_tiers() {
        assert_eq!(dot_diameter(8), 12);
        assert_eq!(dot_diameter(16), 12);
        assert_eq!(dot_diameter(32), 12);
        assert_eq!(dot_diameter(33), 8);
        assert_eq!(dot_diameter(64), 8);
        assert_eq!(dot_diameter(65), 6);
        assert_eq!(dot_diameter(128), 6);
    }

    #[test]
    fn test_diameter_non_increasing() {
        let mut last = u32::MAX;
        for width in 1..=256 {
            let d = dot_diameter(width);
            assert!(d <= last, "diameter grew at width {}", width);
            last = d;
        }
    }

    #[test]
    fn test_gap_formula() {
        for d in 1..=64 {
            assert_eq!(dot_gap(d), ((d as f32 * 0.2).floor() as u32).max(1));
        }
        assert_eq!(dot_gap(12), 2);
        assert_eq!(dot_gap(8), 1);
        assert_eq!(dot_gap(6), 1);
        assert_eq!(dot_gap(4), 1);
    }

    #[test]
    fn test_canvas_dimensions() {
        // 32x16 grid: diameter 12, gap 2 -> pitch 14.
        let grid = GridSize::new(32, 16);
        let geom = GridGeometry::base(grid);
        assert_eq!(geom.canvas_width(grid), 32 * 14 - 2);
        assert_eq!(geom.canvas_height(grid), 16 * 14 - 2);
    }

    #[test]
    fn test_scaled_geometry_uniform() {
        let grid = GridSize::new(32, 16);
        let geom = GridGeometry::scaled(grid, 4, 2);
        assert_eq!(geom.diameter, 48);
        assert_eq!(geom.gap, 8);
        assert_eq!(geom.padding, 8);
        assert_eq!(geom.canvas_width(grid), 32 * 56 - 8 + 16);
    }

    #[test]
    fn test_dot_positions() {
        let grid = GridSize::new(16, 16);
        let geom = GridGeometry::scaled(grid, 2, 2);
        // diameter 24, gap 4, padding 4.
        assert_eq!(geom.dot_origin(0), 4);
        assert_eq!(geom.dot_origin(3), 4 + 3 * 28);
        assert_eq!(geom.dot_center(0), 16.0);
        assert_eq!(geom.radius(), 12.0);
    }
}
