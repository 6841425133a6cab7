//! Gesture state machine and tool parameters.

use crate::draw::{CHARCOAL, Color};
use crate::input::tool::Tool;
use crate::util::Point;

/// Smallest brush/line thickness.
pub const MIN_THICKNESS: u32 = 1;
/// Largest brush/line thickness.
pub const MAX_THICKNESS: u32 = 100;

/// Current gesture state.
///
/// A gesture opens on press and closes on release. Fill and color picker act
/// on press and never leave `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Waiting for a press
    Idle,
    /// A press-drag-release gesture is in progress
    Drawing {
        /// Tool captured when the gesture began
        tool: Tool,
        /// Model point where the press happened
        origin: Point,
        /// Most recent model point of the gesture
        current: Point,
    },
}

/// Drives pointer gestures into buffer edits according to the active tool.
///
/// The controller owns the tool parameters (tool, color, thickness) and the
/// gesture state; the canvas it edits is passed in by reference for every
/// event.
#[derive(Debug, Clone)]
pub struct ToolController {
    /// Tool used for the next gesture
    pub(crate) tool: Tool,
    /// Active drawing color (always opaque)
    pub(crate) color: Color,
    /// Brush size / line thickness in pixels
    pub(crate) thickness: u32,
    /// Whether rectangle and ellipse tools fill their interior
    pub(crate) fill_shapes: bool,
    /// Current gesture state
    pub(crate) state: DrawingState,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(Tool::FreehandPaint, CHARCOAL, 5)
    }
}

impl ToolController {
    /// Creates an idle controller. Thickness is clamped and color made opaque.
    pub fn new(tool: Tool, color: Color, thickness: u32) -> Self {
        Self {
            tool,
            color: color.opaque(),
            thickness: thickness.clamp(MIN_THICKNESS, MAX_THICKNESS),
            fill_shapes: true,
            state: DrawingState::Idle,
        }
    }

    /// Chooses between filled (default) and outlined rectangles/ellipses.
    pub fn with_fill_shapes(mut self, fill_shapes: bool) -> Self {
        self.fill_shapes = fill_shapes;
        self
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the tool for the next gesture.
    ///
    /// A gesture already in progress keeps the tool it started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the active color. Alpha is ignored; the active color is 24-bit.
    pub fn set_color(&mut self, color: Color) {
        self.color = color.opaque();
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Sets the brush size, clamped to [`MIN_THICKNESS`, `MAX_THICKNESS`].
    pub fn set_thickness(&mut self, thickness: u32) {
        self.thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }

    /// Grows or shrinks the brush size by `delta`, staying within bounds.
    pub fn adjust_thickness(&mut self, delta: i32) {
        let adjusted = i64::from(self.thickness) + i64::from(delta);
        self.thickness =
            adjusted.clamp(i64::from(MIN_THICKNESS), i64::from(MAX_THICKNESS)) as u32;
    }

    pub fn fill_shapes(&self) -> bool {
        self.fill_shapes
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Returns true while a gesture is open.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }
}
