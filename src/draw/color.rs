//! RGBA color type and predefined color constants.

use std::fmt;
use std::str::FromStr;

/// Represents an 8-bit RGBA color with straight (non-premultiplied) alpha.
///
/// # Examples
///
/// ```
/// use rasterpad::draw::Color;
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red, "#ff0000".parse().unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns this color with alpha forced to 255.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Compares the red, green and blue channels only.
    ///
    /// Flood fill uses this test, so a translucent pixel matches an opaque
    /// one of the same hue.
    pub fn rgb_eq(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Parses `#rrggbb` or `rrggbb` (case-insensitive) into an opaque color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as a lowercase `#rrggbb` string (alpha omitted).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the components scaled to 0.0-1.0 for Cairo's source API.
    pub fn to_cairo(&self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            f64::from(self.a) / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a color string is neither a hex value nor a known name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}' (expected #rrggbb or a color name)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Color::from_hex(s)
            .or_else(|| name_to_color(s))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Maps color name strings to Color values.
///
/// Supported names (case-insensitive): red, green, blue, yellow, orange,
/// pink, white, black.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants (palette swatches)
// ============================================================================

/// Predefined red color (#ff0000)
pub const RED: Color = Color::rgb(255, 0, 0);

/// Predefined green color (#00ff00)
pub const GREEN: Color = Color::rgb(0, 255, 0);

/// Predefined blue color (#0000ff)
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Predefined yellow color (#ffff00)
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Predefined orange color (#ff8000)
pub const ORANGE: Color = Color::rgb(255, 128, 0);

/// Predefined pink/magenta color (#ff00ff)
pub const PINK: Color = Color::rgb(255, 0, 255);

/// Predefined white color (#ffffff), also the default canvas background
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Predefined black color (#000000), the default brush color
pub const BLACK: Color = Color::rgb(0, 0, 0);
