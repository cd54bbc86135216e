//! Canvas export as PNG.
//!
//! The engine only produces encoded bytes; writing them to disk under the
//! `paint-<unix-epoch-ms>.png` naming convention lives in [`file`].

pub mod file;
pub mod types;

pub use file::{ExportConfig, epoch_millis, generate_filename, save_png};
pub use types::ExportError;

use crate::draw::RasterBuffer;
use crate::draw::render::to_surface;

/// Encodes the full canvas as a PNG image.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>, ExportError> {
    let surface = to_surface(buffer)?;
    let mut bytes = Vec::new();
    surface.write_to_png(&mut bytes)?;
    log::debug!(
        "Encoded {}x{} canvas as PNG ({} bytes)",
        buffer.width(),
        buffer.height(),
        bytes.len()
    );
    Ok(bytes)
}
