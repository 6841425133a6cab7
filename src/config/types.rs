//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas (pixel buffer) settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Buffer width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Buffer height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool parameters a new session starts with.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected at startup (brush, eraser, line, rect, ellipse, fill, picker)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Default brush color - a named color, a `#rrggbb` string, or an RGB array
    /// like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size / line thickness in pixels (valid range: 1 - 100)
    #[serde(default = "default_thickness")]
    pub default_thickness: u32,

    /// Fill rectangles and ellipses (true) or draw outlines only (false)
    #[serde(default = "default_fill_shapes")]
    pub fill_shapes: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_thickness: default_thickness(),
            fill_shapes: default_fill_shapes(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of full-image snapshots kept (valid range: 1 - 500)
    /// Each snapshot costs width x height x 4 bytes
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Zoom behaviour.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ViewportConfig {
    /// Zoom factor at startup (valid range: 0.25 - 8.0)
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,

    /// Zoom change per scroll-wheel notch (valid range: 0.01 - 1.0)
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,

    /// Zoom change per zoom-in/zoom-out command (valid range: 0.01 - 2.0)
    #[serde(default = "default_key_step")]
    pub key_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_zoom: default_initial_zoom(),
            wheel_step: default_wheel_step(),
            key_step: default_key_step(),
        }
    }
}

/// UI display preferences. Purely cosmetic; never affects the image.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the pixel grid overlay at startup
    #[serde(default)]
    pub show_grid: bool,

    /// Grid line spacing in model pixels (valid range: 1 - 256)
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_grid: false,
            grid_spacing: default_grid_spacing(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name template without extension. Supports chrono format specifiers
    /// plus `{width}` and `{height}` placeholders
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    512
}

fn default_height() -> u32 {
    384
}

fn default_tool() -> Tool {
    Tool::FreehandPaint
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#2b2b2b".to_string())
}

fn default_thickness() -> u32 {
    5
}

fn default_fill_shapes() -> bool {
    true
}

fn default_history_capacity() -> usize {
    crate::history::DEFAULT_CAPACITY
}

fn default_initial_zoom() -> f64 {
    1.0
}

fn default_wheel_step() -> f64 {
    0.1
}

fn default_key_step() -> f64 {
    0.25
}

fn default_grid_spacing() -> u32 {
    16
}

fn default_export_directory() -> String {
    "~/Pictures/HappyLittlePixels".to_string()
}

pub(crate) fn default_filename_template() -> String {
    "happy-little-pixels_{width}x{height}_%Y-%m-%dT%H-%M-%S".to_string()
}
