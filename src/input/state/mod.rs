mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{DrawingState, MAX_THICKNESS, MIN_THICKNESS, ToolController};
