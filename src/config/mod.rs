//! Configuration file support for happy-little-pixels.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/happy-little-pixels/config.toml`. Settings include the canvas
//! size, drawing defaults, history depth, zoom steps, and export location.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{
    CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig, UiConfig, ViewportConfig,
};

use crate::viewport::{MAX_ZOOM, MIN_ZOOM};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_SIDE: u32 = 8192;
const MAX_HISTORY: usize = 500;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 512
/// height = 384
///
/// [drawing]
/// default_tool = "brush"
/// default_color = "#2b2b2b"
/// default_thickness = 5
///
/// [history]
/// capacity = 50
///
/// [viewport]
/// initial_zoom = 1.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pixel buffer dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool defaults (tool, color, thickness)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Zoom behaviour
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Cosmetic UI preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// PNG export location and naming
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default when there is no nearest value) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `default_thickness`: 1 - 100
    /// - `history.capacity`: 1 - 500
    /// - `initial_zoom`: 0.25 - 8.0
    /// - `wheel_step`: 0.01 - 1.0, `key_step`: 0.01 - 2.0
    /// - `grid_spacing`: 1 - 256
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_SIDE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIDE);
        }

        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_SIDE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIDE);
        }

        let thickness_range = crate::input::MIN_THICKNESS..=crate::input::MAX_THICKNESS;
        if !thickness_range.contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {}, clamping to 1-100 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self
                .drawing
                .default_thickness
                .clamp(*thickness_range.start(), *thickness_range.end());
        }

        if self.drawing.default_color.to_color().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to '#2b2b2b'",
                self.drawing.default_color
            );
            self.drawing.default_color = DrawingConfig::default().default_color;
        }

        if !(1..=MAX_HISTORY).contains(&self.history.capacity) {
            warn!(
                "Invalid history capacity {}, clamping to 1-{MAX_HISTORY} range",
                self.history.capacity
            );
            self.history.capacity = self.history.capacity.clamp(1, MAX_HISTORY);
        }

        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.viewport.initial_zoom) {
            warn!(
                "Invalid initial_zoom {:.2}, clamping to {MIN_ZOOM}-{MAX_ZOOM} range",
                self.viewport.initial_zoom
            );
            self.viewport.initial_zoom = crate::viewport::clamp_zoom(self.viewport.initial_zoom);
        }

        if !(0.01..=1.0).contains(&self.viewport.wheel_step) {
            warn!(
                "Invalid wheel_step {:.3}, clamping to 0.01-1.0 range",
                self.viewport.wheel_step
            );
            self.viewport.wheel_step = clamp_or(self.viewport.wheel_step, 0.01, 1.0, 0.1);
        }

        if !(0.01..=2.0).contains(&self.viewport.key_step) {
            warn!(
                "Invalid key_step {:.3}, clamping to 0.01-2.0 range",
                self.viewport.key_step
            );
            self.viewport.key_step = clamp_or(self.viewport.key_step, 0.01, 2.0, 0.25);
        }

        if !(1..=256).contains(&self.ui.grid_spacing) {
            warn!(
                "Invalid grid_spacing {}, clamping to 1-256 range",
                self.ui.grid_spacing
            );
            self.ui.grid_spacing = self.ui.grid_spacing.clamp(1, 256);
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, using the default");
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/happy-little-pixels/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("happy-little-pixels");

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

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
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

    /// Saves the configuration as TOML to `config_path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Clamps a float, mapping NaN to `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
