//! Raster canvas primitives (Cairo-based rendering).
//!
//! This module defines the pixel-level building blocks of the paint engine:
//! - [`Color`]: 8-bit RGBA color with predefined palette constants
//! - [`RasterBuffer`] / [`Snapshot`]: the canvas pixels and immutable copies of them
//! - [`UndoLog`]: bounded snapshot history
//! - [`flood_fill`]: 4-connected region fill
//! - [`Shape`] and [`render_shape`]: geometry rasterized through Cairo

pub mod color;
pub mod fill;
pub mod font;
pub mod history;
pub mod raster;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::{Color, ParseColorError};
pub use fill::{FillOutcome, flood_fill};
pub use font::FontDescriptor;
pub use history::{MAX_UNDO, UndoLog};
pub use raster::{RasterBuffer, RasterError, Snapshot};
pub use render::render_shape;
pub use shape::Shape;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
