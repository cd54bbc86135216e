//! Text tool micro-state-machine.
//!
//! A click with the text tool opens a [`PendingText`] entry and asks the host
//! to show an editable field. The host reports the field's value and the
//! confirm key; the engine rasterizes the text when the entry is committed.

use crate::draw::Shape;
use crate::draw::shape::text_size_for_brush;
use crate::input::events::Key;

use super::{PaintEngine, PendingText, TextFieldRequest};

impl PaintEngine {
    /// Handles a text-tool click: commits any open entry, then opens a new
    /// one anchored at the click point.
    pub(super) fn on_text_click(&mut self, x: f64, y: f64) {
        if self.pending_text.is_some() {
            self.commit_text();
        }

        let request = TextFieldRequest {
            x,
            y,
            font_size: text_size_for_brush(self.tools.brush_size),
            color: self.tools.color,
        };
        self.pending_text = Some(PendingText {
            x,
            y,
            buffer: String::new(),
        });
        self.text_field_request = Some(request);
        log::debug!("Text entry opened at ({x}, {y}), {}px", request.font_size);
    }

    /// Replaces the value of the open entry with what the text field holds.
    ///
    /// Ignored when no entry is open.
    pub fn set_text_value(&mut self, value: &str) {
        if let Some(entry) = &mut self.pending_text {
            entry.buffer.clear();
            entry.buffer.push_str(value);
        }
    }

    /// Processes a key forwarded by the text field.
    ///
    /// Returns true if the key was consumed by an open entry.
    ///
    /// # Behavior
    /// - Char: appended to the entry
    /// - Backspace: removes the last character
    /// - Return: commits the entry
    /// - Escape: discards the entry without drawing
    pub fn on_key_press(&mut self, key: Key) -> bool {
        let Some(entry) = &mut self.pending_text else {
            return false;
        };

        match key {
            Key::Char(c) => entry.buffer.push(c),
            Key::Backspace => {
                entry.buffer.pop();
            }
            Key::Return => {
                self.commit_text();
            }
            Key::Escape => self.cancel_text(),
        }
        true
    }

    /// Commits the open entry.
    ///
    /// Non-empty text is drawn with its baseline one font size below the
    /// anchor and pushed onto the undo history. Empty text draws nothing.
    /// Either way the entry is closed. Returns true if text was drawn.
    pub fn commit_text(&mut self) -> bool {
        let Some(entry) = self.pending_text.take() else {
            return false;
        };
        self.close_text_field();

        if entry.buffer.is_empty() {
            log::debug!("Empty text entry discarded");
            return false;
        }

        let size = text_size_for_brush(self.tools.brush_size);
        let shape = Shape::Text {
            x: entry.x,
            y: entry.y + size,
            text: entry.buffer,
            color: self.tools.color,
            size,
            font_descriptor: self.font_descriptor.clone(),
        };

        if self.draw(&shape) {
            self.commit();
            true
        } else {
            false
        }
    }

    /// Drops the open entry without drawing it.
    pub fn cancel_text(&mut self) {
        if self.pending_text.take().is_some() {
            self.close_text_field();
            log::debug!("Text entry cancelled");
        }
    }

    fn close_text_field(&mut self) {
        self.text_field_request = None;
        self.text_field_closed = true;
    }

    /// Takes the pending request for the host to open a text field.
    pub fn take_text_field_request(&mut self) -> Option<TextFieldRequest> {
        self.text_field_request.take()
    }

    /// Returns true once after an entry was committed or cancelled, telling
    /// the host to release its text field.
    pub fn take_text_field_closed(&mut self) -> bool {
        std::mem::take(&mut self.text_field_closed)
    }
}
