//! dotgrid: convert raster images into dot-grid artwork.
//!
//! The crate samples an arbitrary-size bitmap onto a fixed logical grid
//! (one color per cell, cover-fitted, nearest-neighbor) and renders the
//! result as an on-screen preview, a PNG export, or an SVG export. It is
//! the core of an interactive visual tool; all UI plumbing (file picking,
//! drag-and-drop, form controls) belongs to the host.
//!
//! # Quick Start
//!
//! ```
//! use dotgrid::models::GridSize;
//! use dotgrid::rendering::{export_filename, export_svg, ExportFormat};
//! use dotgrid::sampling;
//!
//! // Any bytes the `image` crate can decode; here a tiny in-memory PNG.
//! let mut bytes = Vec::new();
//! image::RgbaImage::from_pixel(8, 8, image::Rgba([200, 40, 40, 255]))
//!     .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
//!     .unwrap();
//!
//! let size = GridSize::new(8, 8);
//! let dots = sampling::convert(&bytes, size).unwrap();
//! assert_eq!(dots.len(), 64);
//!
//! let svg = export_svg(&dots, false).unwrap();
//! assert!(svg.contains("<circle"));
//! assert_eq!(export_filename(size, ExportFormat::Svg), "dot-grid-8x8.svg");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! file bytes --decode_cover--> SourceBitmap --sample--> DotGrid
//!                                                          |
//!                        +--------------------+------------+
//!                        v                    v             v
//!                  PreviewRenderer       export_png    export_svg
//! ```
//!
//! All three consumers derive their layout from the same
//! [`GridGeometry`](rendering::GridGeometry), each at its own resolution
//! multiplier, so output stays visually consistent across targets.
//!
//! [`session::Session`] holds the mutable state of one user session and
//! guards against stale asynchronous decode results via generation-tagged
//! tickets.

pub mod error;
pub mod models;
pub mod rendering;
pub mod sampling;
pub mod session;


pub use error::{ExportError, RenderError, SampleError};
pub use models::{ColorSample, Dot, DotGrid, GridConfig, GridPreset, GridSize};
pub use rendering::{
    export_filename, export_png, export_svg, write_png, write_svg, ExportFormat, GridGeometry,
    PreviewLayout, PreviewRenderer,
};
pub use session::{Session, Ticket};
