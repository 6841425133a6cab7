//! Input event types delivered by the pointer surface.

use crate::util::Point;
use crate::viewport::ScreenPoint;
use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button (drawing)
    #[default]
    Left,
    /// Secondary button (currently unused)
    Right,
    /// Middle button (pans the view)
    Middle,
}

/// Raw pointer event in screen space, as delivered by the input surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed
    Begin {
        pos: ScreenPoint,
        button: MouseButton,
    },
    /// Pointer moved (with or without a button held)
    Move { pos: ScreenPoint },
    /// Button released
    End { pos: ScreenPoint },
    /// Pointer left the tracked surface
    Leave,
}

/// One step of a drawing gesture, already translated into model space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Begin(Point),
    Move(Point),
    End(Point),
}
