//! Bounded undo history of whole-canvas snapshots.

use super::raster::{RasterBuffer, RasterError, Snapshot};
use std::collections::VecDeque;

/// Default number of snapshots retained by the undo log.
pub const MAX_UNDO: usize = 20;

/// Bounded history of [`Snapshot`]s, oldest first.
///
/// Used as a stack: commits push the newest state and undo pops it. When a
/// commit would exceed the capacity the oldest snapshot is evicted. The
/// first snapshot committed after initialization (the blank canvas) acts as
/// a floor; undo never pops the last remaining entry.
#[derive(Debug, Clone)]
pub struct UndoLog {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new(MAX_UNDO)
    }
}

impl UndoLog {
    /// Creates an empty log. A capacity of 0 is raised to 1 so the floor
    /// snapshot always fits.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recently committed snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Records the buffer's current contents, evicting the oldest entry when full.
    pub fn commit(&mut self, buffer: &RasterBuffer) {
        self.snapshots.push_back(buffer.snapshot());
        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            log::debug!("Undo history full, evicted oldest snapshot");
        }
        log::debug!("Committed snapshot ({} in history)", self.snapshots.len());
    }

    /// Steps back one commit.
    ///
    /// Returns `Ok(false)` without touching the buffer when only the floor
    /// snapshot remains.
    pub fn undo(&mut self, buffer: &mut RasterBuffer) -> Result<bool, RasterError> {
        if self.snapshots.len() <= 1 {
            log::debug!("Nothing to undo");
            return Ok(false);
        }

        self.snapshots.pop_back();
        if let Some(previous) = self.snapshots.back() {
            buffer.restore(previous)?;
        }
        log::debug!("Undo restored snapshot ({} in history)", self.snapshots.len());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    fn marked(buffer: &mut RasterBuffer, i: i32) {
        buffer.set(i, 0, BLACK).unwrap();
    }

    #[test]
    fn undo_on_floor_is_noop() {
        let mut buffer = RasterBuffer::new(8, 1, WHITE).unwrap();
        let mut log = UndoLog::default();
        log.commit(&buffer);

        buffer.set(0, 0, BLACK).unwrap();
        assert!(!log.undo(&mut buffer).unwrap());
        assert_eq!(log.len(), 1);
        // Uncommitted change is untouched by a floor undo
        assert_eq!(buffer.get(0, 0).unwrap(), BLACK);
    }

    #[test]
    fn undo_restores_previous_commit() {
        let mut buffer = RasterBuffer::new(8, 1, WHITE).unwrap();
        let mut log = UndoLog::default();
        log.commit(&buffer);

        marked(&mut buffer, 0);
        log.commit(&buffer);
        marked(&mut buffer, 1);
        log.commit(&buffer);

        assert!(log.undo(&mut buffer).unwrap());
        assert_eq!(buffer.get(0, 0).unwrap(), BLACK);
        assert_eq!(buffer.get(1, 0).unwrap(), WHITE);

        assert!(log.undo(&mut buffer).unwrap());
        assert_eq!(buffer.get(0, 0).unwrap(), WHITE);
        assert!(!log.undo(&mut buffer).unwrap());
    }

    #[test]
    fn history_is_bounded_and_evicts_oldest() {
        let mut buffer = RasterBuffer::new(32, 1, WHITE).unwrap();
        let mut log = UndoLog::new(MAX_UNDO);
        log.commit(&buffer);

        for i in 0..25 {
            marked(&mut buffer, i);
            log.commit(&buffer);
            assert!(log.len() <= MAX_UNDO);
        }
        assert_eq!(log.len(), MAX_UNDO);

        while log.undo(&mut buffer).unwrap() {}
        assert_eq!(log.len(), 1);
        // The blank floor was evicted; the oldest survivor has pixels 0..=5 marked
        assert_eq!(buffer.get(5, 0).unwrap(), BLACK);
        assert_eq!(buffer.get(6, 0).unwrap(), WHITE);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = RasterBuffer::new(2, 1, WHITE).unwrap();
        let mut log = UndoLog::new(0);
        log.commit(&buffer);
        marked(&mut buffer, 0);
        log.commit(&buffer);
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }
}
