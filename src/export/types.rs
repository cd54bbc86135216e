//! Data types for canvas export.

use crate::draw::RasterError;
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to prepare canvas for export: {0}")]
    Raster(#[from] RasterError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to save image: {0}")]
    Io(#[from] std::io::Error),
}
