//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// The canvas size is fixed for the lifetime of the engine.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color used for a fresh canvas, clear, and the eraser
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool parameters the engine starts with. Scripts and hosts can
/// change color and brush size at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default color - a named color (red, green, blue, yellow, orange, pink,
    /// white, black), a `#rrggbb` string, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,

    /// Smallest brush size the engine accepts (valid range: 1 - 100)
    #[serde(default = "default_min_brush_size")]
    pub min_brush_size: u32,

    /// Largest brush size the engine accepts (valid range: 1 - 100)
    #[serde(default = "default_max_brush_size")]
    pub max_brush_size: u32,

    /// Font family name for the text tool (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            min_brush_size: default_min_brush_size(),
            max_brush_size: default_max_brush_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Number of canvas snapshots kept for undo (valid range: 1 - 200).
    /// Each snapshot is a full copy of the canvas.
    #[serde(default = "default_max_undo")]
    pub max_undo: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_undo: default_max_undo(),
        }
    }
}

/// Flood fill settings.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct FillConfig {
    /// Maximum pixels a single fill may recolor (0 = unlimited).
    /// Fills exceeding the limit are reverted.
    #[serde(default)]
    pub max_pixels: usize,
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportSettings {
    /// Directory exported images are written to. Supports `~` expansion.
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_min_brush_size() -> u32 {
    1
}

fn default_max_brush_size() -> u32 {
    50
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_max_undo() -> usize {
    crate::draw::MAX_UNDO
}

fn default_export_directory() -> String {
    "~/Pictures/Rasterpad".to_string()
}
