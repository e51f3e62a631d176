//! Single-user session state: current grid size, loaded file, sampled dots.
//!
//! The session is single-threaded and event-driven; the host serializes
//! all calls. The only asynchronous step in a host UI is image decoding,
//! so each conversion is tagged with a [`Ticket`]: a result whose ticket
//! no longer matches the session's generation is discarded instead of
//! overwriting newer state. A grid-size change never cancels an in-flight
//! conversion, it just invalidates its ticket.

use crate::error::{ExportError, SampleError};
use crate::models::{DotGrid, GridSize};
use crate::rendering;
use crate::sampling;

/// Tag for one in-flight conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    /// The grid size the conversion was issued for.
    pub grid_size: GridSize,
}

/// One logical user session. All mutable state of the tool lives here and
/// is recomputable from the loaded bytes plus the current grid size.
#[derive(Debug, Default)]
pub struct Session {
    grid_size: Option<GridSize>,
    source: Option<Vec<u8>>,
    dots: Option<DotGrid>,
    generation: u64,
}

impl Session {
    pub fn new(grid_size: GridSize) -> Self {
        Self {
            grid_size: Some(grid_size),
            ..Self::default()
        }
    }

    pub fn grid_size(&self) -> Option<GridSize> {
        self.grid_size
    }

    /// The current sampled grid, `None` before the first successful
    /// conversion.
    pub fn dots(&self) -> Option<&DotGrid> {
        self.dots.as_ref()
    }

    /// Select a new grid size. Invalidates the current dots and any
    /// in-flight conversion, then re-decodes the most recently loaded
    /// file from scratch at the new size.
    pub fn set_grid_size(&mut self, size: GridSize) -> Result<(), SampleError> {
        if self.grid_size == Some(size) {
            return Ok(());
        }
        self.grid_size = Some(size);
        self.generation += 1;
        self.dots = None;
        if let Some(bytes) = &self.source {
            self.dots = Some(sampling::convert(bytes, size)?);
        }
        Ok(())
    }

    /// Register a newly loaded file and get a ticket for its conversion.
    ///
    /// The caller runs [`convert`](Self::convert) (possibly off the event
    /// loop) and commits the result with [`complete`](Self::complete).
    pub fn begin_load(&mut self, bytes: Vec<u8>, grid_size: GridSize) -> Ticket {
        self.grid_size = Some(grid_size);
        self.source = Some(bytes);
        self.generation += 1;
        Ticket {
            generation: self.generation,
            grid_size,
        }
    }

    /// Run the conversion a ticket was issued for.
    pub fn convert(&self, ticket: &Ticket) -> Result<DotGrid, SampleError> {
        let bytes = self
            .source
            .as_deref()
            .ok_or(SampleError::EmptySource)?;
        sampling::convert(bytes, ticket.grid_size)
    }

    /// Commit a finished conversion. Returns false (and drops the result)
    /// when the ticket is stale.
    pub fn complete(&mut self, ticket: Ticket, grid: DotGrid) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                issued = ticket.generation,
                current = self.generation,
                "Discarding stale conversion result"
            );
            return false;
        }
        self.dots = Some(grid);
        true
    }

    /// Synchronous convenience for hosts without an async decode boundary.
    pub fn load_and_convert(
        &mut self,
        bytes: Vec<u8>,
        grid_size: GridSize,
    ) -> Result<(), SampleError> {
        let ticket = self.begin_load(bytes, grid_size);
        let grid = self.convert(&ticket)?;
        self.complete(ticket, grid);
        Ok(())
    }

    /// Export the current grid as PNG bytes.
    pub fn export_png(&self, transparent: bool) -> Result<Vec<u8>, ExportError> {
        let dots = self.dots.as_ref().ok_or(ExportError::EmptyGrid)?;
        rendering::export_png(dots, transparent)
    }

    /// Export the current grid as an SVG document.
    pub fn export_svg(&self, transparent: bool) -> Result<String, ExportError> {
        let dots = self.dots.as_ref().ok_or(ExportError::EmptyGrid)?;
        rendering::export_svg(dots, transparent)
    }
}
