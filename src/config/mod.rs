//! Configuration file support for rasterpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rasterpad/config.toml`. Settings include the canvas size and
//! background, tool defaults, undo depth, the flood fill ceiling, and the export directory.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportSettings, FillConfig, HistoryConfig};

use crate::draw::{BLACK, FontDescriptor, WHITE};
use crate::export::{ExportConfig, file::expand_tilde};
use crate::input::EngineSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas dimension in pixels.
const MAX_CANVAS_DIMENSION: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [drawing]
/// default_color = "#000000"
/// default_brush_size = 5
///
/// [history]
/// max_undo = 20
///
/// [fill]
/// max_pixels = 0
///
/// [export]
/// directory = "~/Pictures/Rasterpad"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool defaults (color, brush size, text font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Flood fill limits
    #[serde(default)]
    pub fill: FillConfig,

    /// PNG export destination
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `min_brush_size`, `max_brush_size`: 1 - 100, min not above max
    /// - `default_brush_size`: min_brush_size - max_brush_size
    /// - `history.max_undo`: 1 - 200
    pub fn validate_and_clamp(&mut self) {
        // Canvas: 1 - 8192
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_DIMENSION).contains(value) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to 1-{} range",
                    name,
                    value,
                    MAX_CANVAS_DIMENSION
                );
                *value = (*value).clamp(1, MAX_CANVAS_DIMENSION);
            }
        }

        // Brush limits: 1 - 100
        for (name, value) in [
            ("min_brush_size", &mut self.drawing.min_brush_size),
            ("max_brush_size", &mut self.drawing.max_brush_size),
        ] {
            if !(1..=100).contains(value) {
                log::warn!("Invalid {} {}, clamping to 1-100 range", name, value);
                *value = (*value).clamp(1, 100);
            }
        }

        if self.drawing.min_brush_size > self.drawing.max_brush_size {
            log::warn!(
                "min_brush_size {} exceeds max_brush_size {}, using max for both",
                self.drawing.min_brush_size,
                self.drawing.max_brush_size
            );
            self.drawing.min_brush_size = self.drawing.max_brush_size;
        }

        let brush_range = self.drawing.min_brush_size..=self.drawing.max_brush_size;
        if !brush_range.contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to {}-{} range",
                self.drawing.default_brush_size,
                brush_range.start(),
                brush_range.end()
            );
            self.drawing.default_brush_size = self
                .drawing
                .default_brush_size
                .clamp(*brush_range.start(), *brush_range.end());
        }

        // Undo depth: 1 - 200
        if !(1..=200).contains(&self.history.max_undo) {
            log::warn!(
                "Invalid max_undo {}, clamping to 1-200 range",
                self.history.max_undo
            );
            self.history.max_undo = self.history.max_undo.clamp(1, 200);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rasterpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rasterpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds the paint engine parameters described by this configuration.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color_or(WHITE),
            color: self.drawing.default_color.to_color_or(BLACK),
            brush_size: self.drawing.default_brush_size,
            min_brush_size: self.drawing.min_brush_size,
            max_brush_size: self.drawing.max_brush_size,
            max_undo: self.history.max_undo,
            max_fill_pixels: self.fill.max_pixels,
            font_descriptor: FontDescriptor::new(
                self.drawing.font_family.clone(),
                self.drawing.font_weight.clone(),
                self.drawing.font_style.clone(),
            ),
        }
    }

    /// Export destination with `~` expanded.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            save_directory: expand_tilde(&self.export.directory),
        }
    }
}
