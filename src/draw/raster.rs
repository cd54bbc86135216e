//! Fixed-size RGBA pixel buffer and whole-buffer snapshots.

use super::color::Color;
use thiserror::Error;

/// Bytes per pixel (R, G, B, A).
const CHANNELS: usize = 4;

/// Errors raised by raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Pixel access outside the buffer. Callers clamp pointer positions, so
    /// this indicates a coordinate bug rather than a user-facing condition.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("snapshot is {found_width}x{found_height}, canvas is {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },

    #[error("canvas dimensions must be non-zero (got {width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("flood fill exceeded the {limit} pixel ceiling")]
    FillTooLarge { limit: usize },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("cairo surface data unavailable: {0}")]
    SurfaceBorrow(#[from] cairo::BorrowError),
}

/// The in-memory pixel grid backing the canvas.
///
/// Dimensions are fixed at construction. Pixels are stored row-major as
/// straight-alpha RGBA bytes. Every accessor is bounds-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// An immutable full copy of a [`RasterBuffer`]'s pixels at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl RasterBuffer {
    /// Creates a buffer filled with the given color (forced opaque).
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyCanvas { width, height });
        }

        let mut buffer = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        };
        buffer.clear(background);
        Ok(buffer)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Returns true if (x, y) lies inside the canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize, RasterError> {
        if !self.contains(x, y) {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    /// Reads the pixel at (x, y).
    pub fn get(&self, x: i32, y: i32) -> Result<Color, RasterError> {
        let i = self.offset(x, y)?;
        let p = &self.pixels[i..i + CHANNELS];
        Ok(Color::new(p[0], p[1], p[2], p[3]))
    }

    /// Writes the pixel at (x, y) exactly as given.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        let i = self.offset(x, y)?;
        self.pixels[i..i + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        Ok(())
    }

    /// Fills every pixel with `color`, forcing it opaque.
    pub fn clear(&mut self, color: Color) {
        let color = color.opaque();
        for pixel in self.pixels.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Copies the whole buffer into an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone().into_boxed_slice(),
        }
    }

    /// Overwrites the buffer with the snapshot's pixels.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RasterError> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(RasterError::DimensionMismatch {
                width: self.width,
                height: self.height,
                found_width: snapshot.width,
                found_height: snapshot.height,
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    /// Returns true if the buffer holds exactly the snapshot's pixels.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        self.width == snapshot.width
            && self.height == snapshot.height
            && self.pixels[..] == snapshot.pixels[..]
    }
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads a pixel from the snapshot, or `None` if (x, y) is outside it.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let p = &self.pixels[i..i + CHANNELS];
        Some(Color::new(p[0], p[1], p[2], p[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            RasterBuffer::new(0, 10, WHITE),
            Err(RasterError::EmptyCanvas { .. })
        ));
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut buffer = RasterBuffer::new(4, 3, WHITE).unwrap();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert!(matches!(
                buffer.get(x, y),
                Err(RasterError::OutOfBounds { .. })
            ));
            assert!(matches!(
                buffer.set(x, y, RED),
                Err(RasterError::OutOfBounds { .. })
            ));
        }
        buffer.set(3, 2, RED).unwrap();
        assert_eq!(buffer.get(3, 2).unwrap(), RED);
        assert_eq!(buffer.get(0, 0).unwrap(), WHITE);
    }

    #[test]
    fn set_keeps_given_alpha_and_clear_forces_opaque() {
        let mut buffer = RasterBuffer::new(2, 2, WHITE).unwrap();
        buffer.set(0, 0, Color::new(1, 2, 3, 4)).unwrap();
        assert_eq!(buffer.get(0, 0).unwrap().a, 4);

        buffer.clear(Color::new(9, 9, 9, 0));
        assert_eq!(buffer.get(1, 1).unwrap(), Color::rgb(9, 9, 9));
    }

    #[test]
    fn snapshot_restore_round_trips_and_is_independent() {
        let mut buffer = RasterBuffer::new(5, 5, WHITE).unwrap();
        let snapshot = buffer.snapshot();

        buffer.set(2, 2, BLACK).unwrap();
        assert!(!buffer.matches(&snapshot));
        assert_eq!(snapshot.get(2, 2), Some(WHITE));

        buffer.restore(&snapshot).unwrap();
        assert!(buffer.matches(&snapshot));
    }

    #[test]
    fn restore_rejects_foreign_dimensions() {
        let mut buffer = RasterBuffer::new(5, 5, WHITE).unwrap();
        let other = RasterBuffer::new(5, 6, WHITE).unwrap().snapshot();
        assert!(matches!(
            buffer.restore(&other),
            Err(RasterError::DimensionMismatch { .. })
        ));
    }
}
