mod actions;
mod core;
mod mouse;
mod text;
#[cfg(test)]
mod tests;

pub use core::{DrawingState, EngineSettings, PaintEngine, PendingText, TextFieldRequest, ToolState};
