//! Drawing tool selection.

use crate::draw::Composite;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines how a press-drag-release gesture edits the image.
/// Serialized names match the tool picker of the paint UI (`brush`, `eraser`,
/// `line`, `rect`, `ellipse`, `fill`, `picker`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Tool {
    /// Freehand painting with round brush stamps
    #[serde(rename = "brush", alias = "pencil")]
    FreehandPaint,
    /// Freehand erasing to transparency
    #[serde(rename = "eraser")]
    FreehandErase,
    /// Straight line from press point to release point
    #[serde(rename = "line")]
    Line,
    /// Rectangle spanned by press and release points
    #[serde(rename = "rect", alias = "rectangle")]
    Rectangle,
    /// Ellipse inscribed in the press/release rectangle
    #[serde(rename = "ellipse")]
    Ellipse,
    /// Flood fill of the clicked region
    #[serde(rename = "fill")]
    Fill,
    /// Samples the clicked pixel into the active color
    #[serde(rename = "picker", alias = "color-picker")]
    ColorPicker,
}

impl Tool {
    /// Every tool, in tool-picker order.
    pub const ALL: [Tool; 7] = [
        Tool::FreehandPaint,
        Tool::FreehandErase,
        Tool::Line,
        Tool::Rectangle,
        Tool::Ellipse,
        Tool::Fill,
        Tool::ColorPicker,
    ];

    /// Short identifier used in config files and scripts.
    pub fn name(self) -> &'static str {
        match self {
            Tool::FreehandPaint => "brush",
            Tool::FreehandErase => "eraser",
            Tool::Line => "line",
            Tool::Rectangle => "rect",
            Tool::Ellipse => "ellipse",
            Tool::Fill => "fill",
            Tool::ColorPicker => "picker",
        }
    }

    /// Human-readable label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            Tool::FreehandPaint => "Brush",
            Tool::FreehandErase => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rect",
            Tool::Ellipse => "Ellipse",
            Tool::Fill => "Fill",
            Tool::ColorPicker => "Picker",
        }
    }

    /// Freehand tools edit the buffer on every move.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::FreehandPaint | Tool::FreehandErase)
    }

    /// Shape tools only preview while dragging and commit on release.
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Ellipse)
    }

    /// Instant tools act on press and never open a gesture.
    pub fn is_instant(self) -> bool {
        matches!(self, Tool::Fill | Tool::ColorPicker)
    }

    /// Compositing used by the freehand stamps of this tool.
    pub fn composite(self) -> Composite {
        match self {
            Tool::FreehandErase => Composite::Erase,
            _ => Composite::Paint,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brush" | "pencil" => Ok(Tool::FreehandPaint),
            "eraser" => Ok(Tool::FreehandErase),
            "line" => Ok(Tool::Line),
            "rect" | "rectangle" => Ok(Tool::Rectangle),
            "ellipse" => Ok(Tool::Ellipse),
            "fill" => Ok(Tool::Fill),
            "picker" | "color-picker" => Ok(Tool::ColorPicker),
            other => Err(format!("unknown tool '{other}'")),
        }
    }
}
