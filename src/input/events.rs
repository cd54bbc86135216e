//! Normalized input event types delivered by the host.

/// Pointer event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed on the canvas
    Down,
    /// Pointer moved (with or without the button held)
    Move,
    /// Primary button released
    Up,
    /// Pointer left the canvas; ends a gesture like `Up`
    Leave,
}

/// A pointer event in buffer-local coordinates.
///
/// The host translates device, touch, and window coordinates into this
/// space before handing events to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn leave(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Leave, x, y)
    }
}

/// Keys the text-entry collaborator forwards while a text entry is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key
    Char(char),
    /// Return/Enter key (confirms the entry)
    Return,
    /// Backspace key
    Backspace,
    /// Escape key (discards the entry)
    Escape,
}
