//! Library exports for the rasterpad paint engine.
//!
//! Exposes the raster canvas, the tool state machine, PNG export, and the
//! configuration structures so that hosts (a windowed front end, the replay
//! binary, the schema dumper) share one implementation.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;

pub use config::Config;
pub use input::PaintEngine;
