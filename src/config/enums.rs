//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black)
    /// or `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to an opaque [`Color`].
    ///
    /// Unknown names and malformed hex strings fall back to `fallback` with a
    /// warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|_| {
                warn!("Unknown color '{}', using {}", name, fallback);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb(*r, *g, *b),
        }
    }
}
