//! Utility types and functions for geometry and color names.
//!
//! This module provides:
//! - [`Point`]: integer model-space (pixel) coordinates
//! - [`Rect`]: axis-aligned rectangles used for dirty regions and fill reports
//! - Corner normalization for drag-defined shapes
//! - Color name mapping for configuration

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A pixel coordinate in model space.
///
/// Coordinates may lie outside the buffer; drawing primitives clip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Largest edge coordinate a rectangle built from extents may reach.
    ///
    /// Edges beyond it are pulled in, so `x + width` always fits in `i32`.
    /// Buffers are far smaller, so nothing visible is lost.
    pub const EXTENT_LIMIT: i64 = (i32::MAX / 2) as i64;

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::from_extents(
            i64::from(min_x),
            i64::from(min_y),
            i64::from(max_x),
            i64::from(max_y),
        )
    }

    /// Like [`Rect::from_min_max`], for bounds computed in wide arithmetic.
    ///
    /// Edges are limited to [`Rect::EXTENT_LIMIT`] in each direction.
    pub fn from_extents(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Option<Self> {
        if min_x >= max_x || min_y >= max_y {
            return None;
        }
        Some(Self::spanning(min_x, min_y, max_x, max_y))
    }

    /// Builds the smallest rectangle covering both corner pixels (inclusive).
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (min_x, min_y, max_x, max_y) = normalize_corners(a, b);
        Self::spanning(
            i64::from(min_x),
            i64::from(min_y),
            i64::from(max_x) + 1,
            i64::from(max_y) + 1,
        )
    }

    /// Non-empty extents (`min < max`) clamped into the representable range.
    fn spanning(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        let limit = Self::EXTENT_LIMIT;
        let x = min_x.clamp(-limit, limit - 1);
        let y = min_y.clamp(-limit, limit - 1);
        let right = max_x.clamp(x + 1, limit);
        let bottom = max_y.clamp(y + 1, limit);
        Self {
            x: x as i32,
            y: y as i32,
            width: (right - x) as i32,
            height: (bottom - y) as i32,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Expands this rectangle to include another rectangle.
    pub fn expand_to_include(&mut self, other: Rect) {
        *self = Self::spanning(
            i64::from(self.x.min(other.x)),
            i64::from(self.y.min(other.y)),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        );
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        let mut rect = self;
        rect.expand_to_include(other);
        rect
    }

    /// Clamps the rectangle to `[0, width) x [0, height)`.
    ///
    /// Returns `None` when nothing of the rectangle remains inside the bounds.
    pub fn clamped_to_bounds(self, width: i32, height: i32) -> Option<Rect> {
        let (width, height) = (i64::from(width.max(0)), i64::from(height.max(0)));
        Rect::from_extents(
            i64::from(self.x).clamp(0, width),
            i64::from(self.y).clamp(0, height),
            self.right().clamp(0, width),
            self.bottom().clamp(0, height),
        )
    }

    /// Returns true if the pixel lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        x >= i64::from(self.x) && y >= i64::from(self.y) && x < self.right() && y < self.bottom()
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Orders two drag corners into `(min_x, min_y, max_x, max_y)`.
///
/// Shapes are defined by the gesture origin and the current pointer, which may
/// be dragged in any direction.
pub fn normalize_corners(a: Point, b: Point) -> (i32, i32, i32, i32) {
    (a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "charcoal"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "charcoal" => Some(CHARCOAL),
        _ => None,
    }
}
