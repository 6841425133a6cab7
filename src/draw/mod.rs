//! Raster storage and drawing primitives.
//!
//! This module defines the core drawing types used by the editor:
//! - [`Color`]: 8-bit RGBA color with predefined constants
//! - [`PixelBuffer`]: the committed image, with [`Snapshot`] copies for history
//! - Rasterization primitives (discs, thick segments, rectangles, ellipses)
//! - [`flood_fill`]: 4-connected region recoloring
//! - [`Shape`]: gesture previews and committed shape-tool output
//! - [`Canvas`]: buffer + undo history + dirty tracking

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod dirty;
pub mod fill;
pub mod raster;
pub mod shape;

// Re-export commonly used types at module level
pub use buffer::{BufferError, Composite, PixelBuffer, Snapshot};
pub use canvas::Canvas;
pub use color::Color;
pub use dirty::DirtyTracker;
pub use fill::{FillReport, flood_fill};
pub use raster::{brush_radius, shape_line_width};
pub use shape::Shape;

pub use color::{BLACK, BLUE, CHARCOAL, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
