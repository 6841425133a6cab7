//! Input handling and tool state machine.
//!
//! This module turns pointer gestures into drawing actions. It holds the
//! current tool parameters (tool, color, thickness) and the state machine that
//! decides when a gesture edits the buffer directly, when it only previews, and
//! when it is committed to history.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{GestureEvent, MouseButton, PointerEvent};
pub use state::{DrawingState, MAX_THICKNESS, MIN_THICKNESS, ToolController};
pub use tool::Tool;
