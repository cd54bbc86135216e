//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. Changing it never touches the
/// canvas; it only changes how the next gesture is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Brush,
    /// Freehand stroke painted in the background color
    Eraser,
    /// Flood fill of the clicked region
    Fill,
    /// Rectangle outline - from corner to corner
    Rectangle,
    /// Circle outline - centered on the press point
    Circle,
    /// Isosceles triangle outline - apex at the press point
    Triangle,
    /// Straight line - between press and current point
    Line,
    /// Click to place a text entry
    Text,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 8] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Fill,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Line,
        Tool::Text,
    ];

    /// Lowercase identifier used in scripts and logs.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Line => "line",
            Tool::Text => "text",
        }
    }

    /// Tools drawn with the restore-then-redraw preview cycle.
    pub fn is_preview_shape(self) -> bool {
        matches!(
            self,
            Tool::Rectangle | Tool::Circle | Tool::Triangle | Tool::Line
        )
    }

    /// Tools that paint segment by segment while the pointer moves.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == lower)
            .ok_or_else(|| format!("Unknown tool: {s}"))
    }
}
