use crate::models::GridSize;

/// A single sampled pixel color.
///
/// Channels are sRGB bytes; alpha is normalized from the source's 0-255
/// channel to `[0, 1]` so it can feed straight into compositing and SVG
/// `fill-opacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl ColorSample {
    /// Build from raw RGBA bytes, normalizing alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: a as f32 / 255.0,
        }
    }

    /// Fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#rrggbb` hex form, as used by the SVG exporter.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha scaled back to a byte.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_color(&self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.alpha_u8())
    }
}

/// One grid cell's rendered representation: integer grid coordinates plus
/// the color sampled at the cell center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: u32,
    pub y: u32,
    pub color: ColorSample,
}

/// The sampled grid: an ordered row-major sequence of dots plus the
/// size it was sampled at.
///
/// Invariants: `len() == width * height`, and every `(x, y)` pair in
/// `[0, width) x [0, height)` appears exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct DotGrid {
    dots: Vec<Dot>,
    size: GridSize,
}

impl DotGrid {
    /// Wrap a row-major dot sequence.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `dots.len() == size.cell_count()`.
    pub fn new(dots: Vec<Dot>, size: GridSize) -> Self {
        debug_assert_eq!(
            dots.len(),
            size.cell_count(),
            "dot count ({}) must match grid cells ({})",
            dots.len(),
            size.cell_count(),
        );
        Self { dots, size }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Dot at grid coordinates, row-major indexed.
    pub fn get(&self, x: u32, y: u32) -> Option<&Dot> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.dots
            .get((y as usize * self.size.width as usize) + x as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dot> {
        self.dots.iter()
    }
}
