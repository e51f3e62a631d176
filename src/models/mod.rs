pub mod dot;
pub mod grid;

pub use dot::{ColorSample, Dot, DotGrid};
pub use grid::{GridConfig, GridPreset, GridSize};
