use crate::draw::{Color, RasterError, Shape, flood_fill};
use crate::input::events::{PointerEvent, PointerKind};
use crate::input::tool::Tool;
use log::{debug, error, warn};

use super::{DrawingState, PaintEngine};

impl PaintEngine {
    /// Single entry point for pointer input.
    ///
    /// # Behavior
    /// - Down while Idle: starts a gesture with the current tool (fill applies
    ///   immediately), or opens a text entry when the text tool is active
    /// - Move while drawing: paints a freehand segment or redraws the shape preview
    /// - Up / Leave while drawing: ends the gesture and commits it to the undo
    ///   history (fill already committed on press)
    ///
    /// Events that do not apply to the current state are ignored.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event.x, event.y),
            PointerKind::Move => self.on_pointer_move(event.x, event.y),
            PointerKind::Up | PointerKind::Leave => self.on_pointer_release(),
        }
    }

    fn on_pointer_down(&mut self, x: f64, y: f64) {
        if !matches!(self.state, DrawingState::Idle) {
            debug!("Ignoring press at ({x}, {y}) during a gesture");
            return;
        }

        let tool = self.tools.tool;
        if tool == Tool::Text {
            self.on_text_click(x, y);
            return;
        }

        let preview = tool.is_preview_shape().then(|| self.buffer.snapshot());
        self.state = DrawingState::Drawing {
            tool,
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
            preview,
        };
        debug!("Gesture started: {tool} at ({x}, {y})");

        if tool == Tool::Fill {
            self.apply_fill(x, y);
        }
    }

    fn on_pointer_move(&mut self, x: f64, y: f64) {
        let color = self.tools.color;
        let width = f64::from(self.tools.brush_size);

        let DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            last_x,
            last_y,
            preview,
        } = &mut self.state
        else {
            return;
        };

        let shape = match *tool {
            Tool::Brush | Tool::Eraser => {
                let stroke_color = if *tool == Tool::Eraser {
                    self.background
                } else {
                    color
                };
                let from = (*last_x, *last_y);
                *last_x = x;
                *last_y = y;
                Shape::segment(from, (x, y), stroke_color, width)
            }
            Tool::Rectangle | Tool::Circle | Tool::Triangle | Tool::Line => {
                // Wipe the previous preview before drawing the new one
                if let Some(snapshot) = preview.as_ref()
                    && let Err(err) = self.buffer.restore(snapshot)
                {
                    error!("Failed to restore preview snapshot: {err}");
                    return;
                }
                match preview_shape(*tool, *start_x, *start_y, x, y, color, width) {
                    Some(shape) => shape,
                    None => return,
                }
            }
            Tool::Fill | Tool::Text => return,
        };

        self.draw(&shape);
    }

    fn on_pointer_release(&mut self) {
        let DrawingState::Drawing { tool, .. } = std::mem::take(&mut self.state) else {
            return;
        };

        if tool != Tool::Fill {
            self.commit();
        }
        debug!("Gesture ended: {tool}");
    }

    /// Abandons the gesture in progress without committing it and puts the
    /// canvas back to the last committed snapshot.
    ///
    /// Returns true if a gesture was cancelled.
    pub(super) fn cancel_gesture(&mut self) -> bool {
        let DrawingState::Drawing { tool, .. } = std::mem::take(&mut self.state) else {
            return false;
        };

        if let Some(latest) = self.history.latest()
            && let Err(err) = self.buffer.restore(latest)
        {
            error!("Failed to discard {tool} gesture: {err}");
        }
        self.needs_redraw = true;
        debug!("Gesture cancelled: {tool}");
        true
    }

    fn apply_fill(&mut self, x: f64, y: f64) {
        let seed_x = x.floor() as i32;
        let seed_y = y.floor() as i32;

        match flood_fill(
            &mut self.buffer,
            seed_x,
            seed_y,
            self.tools.color,
            self.max_fill_pixels,
        ) {
            Ok(outcome) if outcome.changed() => self.commit(),
            Ok(_) => {}
            Err(err @ RasterError::FillTooLarge { .. }) => {
                warn!("Fill at ({seed_x}, {seed_y}) skipped: {err}");
            }
            Err(err) => {
                error!("Fill at ({seed_x}, {seed_y}) failed: {err}");
            }
        }
    }
}

/// Builds the shape a preview tool draws between the anchor and the cursor.
fn preview_shape(
    tool: Tool,
    sx: f64,
    sy: f64,
    x: f64,
    y: f64,
    color: Color,
    width: f64,
) -> Option<Shape> {
    match tool {
        Tool::Rectangle => Some(Shape::rect(sx, sy, x, y, color, width)),
        Tool::Circle => Some(Shape::circle(sx, sy, x, y, color, width)),
        Tool::Triangle => Some(Shape::triangle(sx, sy, x, y, color, width)),
        Tool::Line => Some(Shape::line(sx, sy, x, y, color, width)),
        _ => None,
    }
}
