//! Input handling and the paint engine state machine.

pub mod events;
pub mod state;
pub mod tool;

pub use events::{Key, PointerEvent, PointerKind};
pub use state::{DrawingState, EngineSettings, PaintEngine, PendingText, TextFieldRequest, ToolState};
pub use tool::Tool;
