//! Connected-region flood fill.

use super::color::Color;
use super::raster::{RasterBuffer, RasterError};

/// Result of a completed flood fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The seed already had the fill color (RGB-equal); nothing was touched.
    Unchanged,
    /// The region was recolored.
    Filled {
        /// Number of pixels recolored.
        pixels: usize,
    },
}

impl FillOutcome {
    /// Returns true if any pixel changed and the fill should be committed.
    pub fn changed(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

/// Recolors the 4-connected region of the seed's color with `fill`.
///
/// Matching compares RGB only; written pixels are always opaque. The region
/// is walked with an explicit LIFO work stack. Neighbours are pushed without
/// checks and validated when popped, so a coordinate may be pushed several
/// times; later visits find it already recolored and stop.
///
/// `limit` caps the number of recolored pixels (0 = unbounded). When the cap
/// is hit the buffer is put back the way it was and
/// [`RasterError::FillTooLarge`] is returned.
///
/// # Errors
/// [`RasterError::OutOfBounds`] if the seed is outside the buffer.
pub fn flood_fill(
    buffer: &mut RasterBuffer,
    seed_x: i32,
    seed_y: i32,
    fill: Color,
    limit: usize,
) -> Result<FillOutcome, RasterError> {
    let target = buffer.get(seed_x, seed_y)?;
    if target.rgb_eq(&fill) {
        log::debug!("Fill at ({seed_x}, {seed_y}) already {fill}, skipping");
        return Ok(FillOutcome::Unchanged);
    }

    let fill = fill.opaque();
    let original = (limit > 0).then(|| buffer.snapshot());
    let mut stack: Vec<(i32, i32)> = vec![(seed_x, seed_y)];
    let mut filled = 0usize;

    while let Some((x, y)) = stack.pop() {
        if !buffer.contains(x, y) {
            continue;
        }
        if !buffer.get(x, y)?.rgb_eq(&target) {
            continue;
        }

        if limit > 0 && filled >= limit {
            if let Some(original) = &original {
                buffer.restore(original)?;
            }
            log::warn!("Flood fill at ({seed_x}, {seed_y}) exceeded {limit} pixels, reverted");
            return Err(RasterError::FillTooLarge { limit });
        }

        buffer.set(x, y, fill)?;
        filled += 1;

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }

    log::debug!("Flood fill at ({seed_x}, {seed_y}) recolored {filled} pixels with {fill}");
    Ok(FillOutcome::Filled { pixels: filled })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, GREEN, RED, WHITE};

    /// 7x7 white canvas with a closed black ring around the 3x3 center.
    fn ring_canvas() -> RasterBuffer {
        let mut buffer = RasterBuffer::new(7, 7, WHITE).unwrap();
        for i in 1..=5 {
            for (x, y) in [(i, 1), (i, 5), (1, i), (5, i)] {
                buffer.set(x, y, BLACK).unwrap();
            }
        }
        buffer
    }

    #[test]
    fn fills_only_the_enclosed_region() {
        let mut buffer = ring_canvas();
        let outcome = flood_fill(&mut buffer, 3, 3, RED, 0).unwrap();
        assert_eq!(outcome, FillOutcome::Filled { pixels: 9 });

        for y in 0..7 {
            for x in 0..7 {
                let inside = (2..=4).contains(&x) && (2..=4).contains(&y);
                let ring = !inside && (1..=5).contains(&x) && (1..=5).contains(&y);
                let expected = if inside {
                    RED
                } else if ring {
                    BLACK
                } else {
                    WHITE
                };
                assert_eq!(buffer.get(x, y).unwrap(), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn diagonal_neighbours_are_not_connected() {
        let mut buffer = RasterBuffer::new(2, 2, WHITE).unwrap();
        buffer.set(1, 0, BLACK).unwrap();
        buffer.set(0, 1, BLACK).unwrap();

        flood_fill(&mut buffer, 0, 0, GREEN, 0).unwrap();
        assert_eq!(buffer.get(0, 0).unwrap(), GREEN);
        assert_eq!(buffer.get(1, 1).unwrap(), WHITE);
    }

    #[test]
    fn same_rgb_is_a_noop_even_with_different_alpha() {
        let mut buffer = RasterBuffer::new(3, 3, WHITE).unwrap();
        buffer.set(1, 1, Color::new(255, 255, 255, 10)).unwrap();
        let before = buffer.snapshot();

        let outcome = flood_fill(&mut buffer, 1, 1, Color::new(255, 255, 255, 255), 0).unwrap();
        assert_eq!(outcome, FillOutcome::Unchanged);
        assert!(!outcome.changed());
        assert!(buffer.matches(&before));
    }

    #[test]
    fn fill_forces_opaque_alpha_and_matches_translucent_target() {
        let mut buffer = RasterBuffer::new(2, 1, WHITE).unwrap();
        buffer.set(1, 0, Color::new(255, 255, 255, 0)).unwrap();

        flood_fill(&mut buffer, 0, 0, Color::new(0, 0, 255, 7), 0).unwrap();
        assert_eq!(buffer.get(0, 0).unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(buffer.get(1, 0).unwrap(), Color::rgb(0, 0, 255));
    }

    #[test]
    fn seed_outside_buffer_is_an_error() {
        let mut buffer = RasterBuffer::new(3, 3, WHITE).unwrap();
        assert!(matches!(
            flood_fill(&mut buffer, 3, 0, RED, 0),
            Err(RasterError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn ceiling_reverts_partial_fill() {
        let mut buffer = RasterBuffer::new(10, 10, WHITE).unwrap();
        let before = buffer.snapshot();

        let result = flood_fill(&mut buffer, 0, 0, RED, 50);
        assert!(matches!(result, Err(RasterError::FillTooLarge { limit: 50 })));
        assert!(buffer.matches(&before));

        let outcome = flood_fill(&mut buffer, 0, 0, RED, 100).unwrap();
        assert_eq!(outcome, FillOutcome::Filled { pixels: 100 });
    }
}
