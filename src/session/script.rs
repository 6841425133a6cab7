//! Replayable edit scripts.
//!
//! A script is a list of input steps in screen coordinates, stored as TOML
//! (`[[step]]` tables) or JSON (`{"step": [...]}`):
//!
//! ```toml
//! [[step]]
//! op = "tool"
//! tool = "rect"
//!
//! [[step]]
//! op = "begin"
//! x = 20.0
//! y = 20.0
//!
//! [[step]]
//! op = "end"
//! x = 80.0
//! y = 60.0
//! ```

use super::EditorSession;
use crate::config::ColorSpec;
use crate::input::{MouseButton, PointerEvent, Tool};
use crate::viewport::ScreenPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON script: {0}")]
    Json(#[from] serde_json::Error),
}

/// One recorded input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
    Tool {
        tool: Tool,
    },
    Color {
        color: ColorSpec,
    },
    Thickness {
        size: u32,
    },
    Begin {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        x: f64,
        y: f64,
    },
    End {
        x: f64,
        y: f64,
    },
    Leave,
    /// Wheel notch at `(x, y)`; negative `delta` zooms in
    Wheel {
        x: f64,
        y: f64,
        delta: f64,
    },
    ZoomIn,
    ZoomOut,
    Pan {
        dx: f64,
        dy: f64,
    },
    Undo,
    Redo,
    Clear,
    Grid,
}

/// Ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Loads a script, choosing JSON for `.json` files and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let script = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_toml(&text)?
        };
        log::info!(
            "Loaded {} script steps from {}",
            script.steps.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn from_toml(text: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl EditorSession {
    /// Replays one script step.
    pub fn apply_step(&mut self, step: &Step) {
        log::trace!("Step: {step:?}");
        match step {
            Step::Tool { tool } => self.set_tool(*tool),
            Step::Color { color } => {
                self.set_color(color);
            }
            Step::Thickness { size } => self.set_thickness(*size),
            Step::Begin { x, y, button } => self.handle_pointer(PointerEvent::Begin {
                pos: ScreenPoint::new(*x, *y),
                button: *button,
            }),
            Step::Move { x, y } => self.handle_pointer(PointerEvent::Move {
                pos: ScreenPoint::new(*x, *y),
            }),
            Step::End { x, y } => self.handle_pointer(PointerEvent::End {
                pos: ScreenPoint::new(*x, *y),
            }),
            Step::Leave => self.handle_pointer(PointerEvent::Leave),
            Step::Wheel { x, y, delta } => self.on_wheel(ScreenPoint::new(*x, *y), *delta),
            Step::ZoomIn => self.zoom_in(),
            Step::ZoomOut => self.zoom_out(),
            Step::Pan { dx, dy } => self.pan_by(*dx, *dy),
            Step::Undo => {
                self.undo();
            }
            Step::Redo => {
                self.redo();
            }
            Step::Clear => self.clear(),
            Step::Grid => self.toggle_grid(),
        }
    }

    /// Replays every step of `script` in order.
    pub fn run_script(&mut self, script: &Script) {
        for step in &script.steps {
            self.apply_step(step);
        }
    }
}
