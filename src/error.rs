use thiserror::Error;

/// Errors produced while turning a source image into a sampled dot grid.
///
/// All variants are surfaced to the caller; none are retried. A `Decode`
/// failure means the user must pick another file, nothing else in the
/// session is affected.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Source image has zero dimensions")]
    EmptySource,
}

/// Errors from the raster drawing pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

/// Errors from the export surface (PNG / SVG file generation).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: no image has been sampled")]
    EmptyGrid,

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_error_decode() {
        let error = SampleError::Decode("bad magic bytes".to_string());
        assert_eq!(error.to_string(), "Image decode error: bad magic bytes");
    }

    #[test]
    fn test_sample_error_empty_source() {
        let error = SampleError::EmptySource;
        assert_eq!(error.to_string(), "Source image has zero dimensions");
    }

    #[test]
    fn test_render_error_pixmap_allocation() {
        let error = RenderError::PixmapAllocation;
        assert_eq!(error.to_string(), "Failed to allocate pixmap");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("invalid bit depth".to_string());
        assert_eq!(error.to_string(), "PNG encode error: invalid bit depth");
    }

    #[test]
    fn test_export_error_empty_grid() {
        let error = ExportError::EmptyGrid;
        assert_eq!(
            error.to_string(),
            "Nothing to export: no image has been sampled"
        );
    }

    #[test]
    fn test_export_error_from_render_error() {
        let render_error = RenderError::PixmapAllocation;
        let export_error: ExportError = render_error.into();
        match export_error {
            ExportError::Render(_) => {}
            _ => panic!("Expected Render variant"),
        }
    }
}
