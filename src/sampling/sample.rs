use crate::models::{Dot, DotGrid, GridSize};
use crate::sampling::SourceBitmap;

/// Sample a bitmap onto a grid: one color per cell, row-major order.
///
/// Each cell reads the single source pixel at its center
/// (`floor(col * cell_w + cell_w / 2)` and likewise for rows) by
/// nearest-neighbor, deliberately without averaging across the cell.
/// Works for any bitmap at least as large as the grid; the usual caller
/// passes a bitmap already at the grid's pixel dimensions.
pub fn sample(bitmap: &SourceBitmap, grid: GridSize) -> DotGrid {
    let cell_w = bitmap.width() as f64 / grid.width as f64;
    let cell_h = bitmap.height() as f64 / grid.height as f64;

    let mut dots = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.height {
        for col in 0..grid.width {
            let sx = ((col as f64 * cell_w + cell_w / 2.0).floor() as u32)
                .min(bitmap.width() - 1);
            let sy = ((row as f64 * cell_h + cell_h / 2.0).floor() as u32)
                .min(bitmap.height() - 1);
            dots.push(Dot {
                x: col,
                y: row,
                color: bitmap.pixel(sx, sy),
            });
        }
    }

    tracing::info!(dots = dots.len(), grid = %grid, "Sampled image onto grid");
    DotGrid::new(dots, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorSample;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    fn bitmap_from(image: RgbaImage) -> SourceBitmap {
        SourceBitmap::from_rgba(image)
    }

    #[test]
    fn test_round_trip_2x2() {
        let img = RgbaImage::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) => Rgba([255, 0, 0, 255]),
            (1, 0) => Rgba([0, 255, 0, 255]),
            (0, 1) => Rgba([0, 0, 255, 255]),
            _ => Rgba([255, 255, 0, 255]),
        });
        let grid = sample(&bitmap_from(img), GridSize::new(2, 2));

        assert_eq!(grid.len(), 4);
        assert_eq!(grid.get(0, 0).unwrap().color, ColorSample::opaque(255, 0, 0));
        assert_eq!(grid.get(1, 0).unwrap().color, ColorSample::opaque(0, 255, 0));
        assert_eq!(grid.get(0, 1).unwrap().color, ColorSample::opaque(0, 0, 255));
        assert_eq!(grid.get(1, 1).unwrap().color, ColorSample::opaque(255, 255, 0));
    }

    #[test]
    fn test_cell_center_on_larger_bitmap() {
        // 4x4 bitmap sampled onto 2x2: cell centers land at pixel 1 and 3
        // of each axis (floor(0*2 + 1) = 1, floor(1*2 + 1) = 3).
        let img = RgbaImage::from_fn(4, 4, |x, y| {
            if (x, y) == (1, 1) {
                Rgba([255, 0, 0, 255])
            } else if (x, y) == (3, 3) {
                Rgba([0, 255, 0, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let grid = sample(&bitmap_from(img), GridSize::new(2, 2));
        assert_eq!(grid.get(0, 0).unwrap().color, ColorSample::opaque(255, 0, 0));
        assert_eq!(grid.get(1, 1).unwrap().color, ColorSample::opaque(0, 255, 0));
    }

    #[test]
    fn test_row_major_coordinate_coverage() {
        let img = RgbaImage::from_pixel(8, 4, Rgba([9, 9, 9, 255]));
        let size = GridSize::new(8, 4);
        let grid = sample(&bitmap_from(img), size);

        assert_eq!(grid.len(), size.cell_count());
        for (i, dot) in grid.iter().enumerate() {
            let expected_x = (i as u32) % size.width;
            let expected_y = (i as u32) / size.width;
            assert_eq!((dot.x, dot.y), (expected_x, expected_y));
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, 77, 255])
        });
        let bitmap = bitmap_from(img);
        let a = sample(&bitmap, GridSize::new(4, 4));
        let b = sample(&bitmap, GridSize::new(4, 4));
        assert_eq!(a, b);
    }
}
