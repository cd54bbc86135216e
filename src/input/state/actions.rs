use crate::export::{ExportError, encode_png, generate_filename};

use super::PaintEngine;

impl PaintEngine {
    /// Steps the canvas back to the previous committed snapshot.
    ///
    /// The floor snapshot is never popped, so undo on a fresh canvas is a
    /// no-op. A gesture in progress is discarded first; an open text entry
    /// stays open. Returns true if the canvas was restored.
    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        match self.history.undo(&mut self.buffer) {
            Ok(true) => {
                log::debug!("Undo: {} snapshot(s) left", self.history.len());
                self.needs_redraw = true;
                true
            }
            Ok(false) => {
                log::debug!("Undo: nothing to undo");
                false
            }
            Err(err) => {
                log::error!("Undo failed: {err}");
                false
            }
        }
    }

    /// Wipes the canvas to the background color and commits the result, so
    /// a clear can itself be undone. A gesture in progress is discarded.
    pub fn clear(&mut self) {
        self.cancel_gesture();
        self.buffer.clear(self.background);
        self.commit();
        log::info!("Canvas cleared");
    }

    /// Encodes the live canvas as a PNG image.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        encode_png(&self.buffer)
    }

    /// File name an export taken at `epoch_ms` should be saved under.
    pub fn export_filename(&self, epoch_ms: i64) -> String {
        generate_filename(epoch_ms)
    }
}
