//! Drawing state machine and paint engine state.

use crate::draw::{
    BLACK, Color, FontDescriptor, MAX_UNDO, ParseColorError, RasterBuffer, RasterError, Shape,
    Snapshot, UndoLog, WHITE, render_shape,
};
use crate::input::tool::Tool;

/// Current gesture state machine.
///
/// Tracks whether the user is idle or in the middle of a pointer-down to
/// pointer-up cycle. Text entry is not a gesture; see [`PendingText`].
#[derive(Debug, Default)]
pub enum DrawingState {
    /// Not in a gesture - waiting for a pointer press
    #[default]
    Idle,
    /// Pointer is held down on the canvas
    Drawing {
        /// Tool captured at press time for the whole gesture
        tool: Tool,
        /// X coordinate where the pointer was pressed
        start_x: f64,
        /// Y coordinate where the pointer was pressed
        start_y: f64,
        /// Previous pointer X (freehand segments start here)
        last_x: f64,
        /// Previous pointer Y
        last_y: f64,
        /// Canvas as it was before the gesture, restored before each
        /// preview redraw. Only set for preview-shape tools and dropped
        /// with the gesture.
        preview: Option<Snapshot>,
    },
}

/// An open text entry waiting for the collaborator to finish typing.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingText {
    /// X coordinate of the click that opened the entry
    pub x: f64,
    /// Y coordinate of the click that opened the entry
    pub y: f64,
    /// Current value reported by the text field
    pub buffer: String,
}

/// Request for the host to show an editable text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFieldRequest {
    pub x: f64,
    pub y: f64,
    /// Font size in pixels
    pub font_size: f64,
    pub color: Color,
}

/// Externally controlled tool parameters, read on demand by each gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    /// Active tool
    pub tool: Tool,
    /// Stroke, fill, and text color
    pub color: Color,
    /// Stroke width in pixels
    pub brush_size: u32,
}

/// Construction parameters for a [`PaintEngine`].
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Canvas background (also the eraser color)
    pub background: Color,
    /// Initial drawing color
    pub color: Color,
    /// Initial brush size in pixels
    pub brush_size: u32,
    /// Smallest allowed brush size
    pub min_brush_size: u32,
    /// Largest allowed brush size
    pub max_brush_size: u32,
    /// Maximum number of undo snapshots
    pub max_undo: usize,
    /// Flood fill pixel ceiling (0 = unlimited)
    pub max_fill_pixels: usize,
    /// Font used by the text tool
    pub font_descriptor: FontDescriptor,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: WHITE,
            color: BLACK,
            brush_size: 5,
            min_brush_size: 1,
            max_brush_size: 50,
            max_undo: MAX_UNDO,
            max_fill_pixels: 0,
            font_descriptor: FontDescriptor::default(),
        }
    }
}

/// The raster editing engine.
///
/// Owns the canvas pixels, the undo history, the tool parameters, and the
/// transient gesture and text-entry state. All input arrives through
/// [`PaintEngine::handle_pointer_event`], the tool setters, the text-entry
/// methods, and the actions (undo, clear, export). Errors from rendering or
/// filling are logged and never abort the event being processed.
pub struct PaintEngine {
    /// Canvas pixels
    pub(super) buffer: RasterBuffer,
    /// Undo snapshots (floor snapshot committed at construction)
    pub(super) history: UndoLog,
    /// Current tool, color, and brush size
    pub(super) tools: ToolState,
    /// Current gesture state machine
    pub(super) state: DrawingState,
    /// Open text entry, if any
    pub(super) pending_text: Option<PendingText>,
    /// Text field the host should open (taken by the host)
    pub(super) text_field_request: Option<TextFieldRequest>,
    /// Whether the host should close its text field (taken by the host)
    pub(super) text_field_closed: bool,
    /// Background color used by clear and the eraser
    pub(super) background: Color,
    /// Font used by the text tool
    pub(super) font_descriptor: FontDescriptor,
    /// Allowed brush size range (inclusive)
    brush_range: (u32, u32),
    /// Flood fill pixel ceiling (0 = unlimited)
    pub(super) max_fill_pixels: usize,
    /// Whether the canvas changed since the host last presented it
    pub needs_redraw: bool,
}

impl PaintEngine {
    /// Creates an engine with a canvas cleared to the background color and
    /// commits that blank canvas as the floor undo snapshot.
    ///
    /// # Errors
    /// Returns [`RasterError::EmptyCanvas`] if either dimension is zero.
    pub fn new(settings: EngineSettings) -> Result<Self, RasterError> {
        let buffer = RasterBuffer::new(settings.width, settings.height, settings.background)?;
        let mut history = UndoLog::new(settings.max_undo);
        history.commit(&buffer);

        let min_brush = settings.min_brush_size.max(1);
        let max_brush = settings.max_brush_size.max(min_brush);

        log::info!(
            "Canvas ready: {}x{} background {}, undo depth {}",
            settings.width,
            settings.height,
            settings.background,
            history.capacity()
        );

        Ok(Self {
            buffer,
            history,
            tools: ToolState {
                tool: Tool::default(),
                color: settings.color,
                brush_size: settings.brush_size.clamp(min_brush, max_brush),
            },
            state: DrawingState::Idle,
            pending_text: None,
            text_field_request: None,
            text_field_closed: false,
            background: settings.background.opaque(),
            font_descriptor: settings.font_descriptor,
            brush_range: (min_brush, max_brush),
            max_fill_pixels: settings.max_fill_pixels,
            needs_redraw: true,
        })
    }

    /// The canvas pixels.
    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    /// Number of snapshots in the undo history (at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent committed snapshot.
    pub fn last_commit(&self) -> Option<&Snapshot> {
        self.history.latest()
    }

    pub fn tool_state(&self) -> ToolState {
        self.tools
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool
    }

    pub fn color(&self) -> Color {
        self.tools.color
    }

    pub fn brush_size(&self) -> u32 {
        self.tools.brush_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn current_state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn pending_text(&self) -> Option<&PendingText> {
        self.pending_text.as_ref()
    }

    /// Selects the active tool.
    ///
    /// Leaving the text tool force-commits an open text entry. A gesture in
    /// progress keeps the tool it started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != Tool::Text && self.pending_text.is_some() {
            self.commit_text();
        }
        if self.tools.tool != tool {
            log::debug!("Tool changed: {} -> {}", self.tools.tool, tool);
            self.tools.tool = tool;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
        log::debug!("Color set to {color}");
    }

    /// Sets the color from a `#rrggbb` string or palette name.
    pub fn set_color_str(&mut self, value: &str) -> Result<(), ParseColorError> {
        self.set_color(value.parse()?);
        Ok(())
    }

    /// Sets the brush size, clamped to the configured range.
    pub fn set_brush_size(&mut self, size: u32) {
        let (min, max) = self.brush_range;
        let clamped = size.clamp(min, max);
        if clamped != size {
            log::warn!("Brush size {size} out of range, using {clamped}");
        }
        self.tools.brush_size = clamped;
    }

    /// Pushes the current canvas onto the undo history.
    pub(super) fn commit(&mut self) {
        self.history.commit(&self.buffer);
        self.needs_redraw = true;
    }

    /// Rasterizes a shape onto the live canvas. Returns false (after logging)
    /// if Cairo failed, in which case the canvas is unchanged.
    pub(super) fn draw(&mut self, shape: &Shape) -> bool {
        match render_shape(&mut self.buffer, shape) {
            Ok(()) => {
                self.needs_redraw = true;
                true
            }
            Err(err) => {
                log::error!("Failed to render {shape:?}: {err}");
                false
            }
        }
    }
}
