//! Shape definitions for gesture previews and committed shape tools.

use super::buffer::{Composite, PixelBuffer};
use super::color::Color;
use crate::util::{Point, Rect, normalize_corners};

/// A shape anchored at a gesture's origin and current point.
///
/// Shapes are what the renderer draws as a non-destructive preview while a
/// gesture is open; line and shape tools rasterize the same value into the
/// buffer when the gesture ends.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight line between two points
    Line {
        /// Gesture origin
        from: Point,
        /// Current or final pointer position
        to: Point,
        /// Line color
        color: Color,
        /// Line width in pixels
        thick: u32,
    },
    /// Axis-aligned rectangle spanned by two corners
    Rect {
        /// First corner
        a: Point,
        /// Opposite corner
        b: Point,
        /// Fill and border color
        color: Color,
        /// Border width in pixels
        thick: u32,
        /// Whether the interior is filled
        filled: bool,
    },
    /// Ellipse inscribed in the rectangle spanned by two corners
    Ellipse {
        /// First corner of the bounding rectangle
        a: Point,
        /// Opposite corner of the bounding rectangle
        b: Point,
        /// Fill and border color
        color: Color,
        /// Border width in pixels
        thick: u32,
        /// Whether the interior is filled
        filled: bool,
    },
    /// Brush footprint under the pointer for freehand tools (preview only)
    BrushCursor {
        center: Point,
        radius: u32,
        color: Color,
        composite: Composite,
    },
}

impl Shape {
    /// Returns the axis-aligned bounding box, in model space, unclipped.
    ///
    /// The returned rectangle is suitable for dirty region tracking.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Line {
                from, to, thick, ..
            } => bounding_box_for_line(*from, *to, *thick),
            Shape::Rect { a, b, .. } | Shape::Ellipse { a, b, .. } => {
                Some(Rect::from_corners(*a, *b))
            }
            Shape::BrushCursor { center, radius, .. } => {
                let r = i64::from(*radius);
                let (x, y) = (i64::from(center.x), i64::from(center.y));
                Rect::from_extents(x - r, y - r, x + r + 1, y + r + 1)
            }
        }
    }

    /// Rasterizes the shape into the buffer, returning the clipped damage.
    ///
    /// The brush cursor is never committed and leaves the buffer untouched.
    pub fn rasterize(&self, buffer: &mut PixelBuffer) -> Option<Rect> {
        match *self {
            Shape::Line {
                from,
                to,
                color,
                thick,
            } => buffer.stroke_line(from, to, color, thick),
            Shape::Rect {
                a,
                b,
                color,
                thick,
                filled,
            } => {
                if filled {
                    buffer.fill_rect(a, b, color)
                } else {
                    buffer.stroke_rect(a, b, color, thick)
                }
            }
            Shape::Ellipse {
                a,
                b,
                color,
                thick,
                filled,
            } => {
                if filled {
                    buffer.fill_ellipse_bounded(a, b, color)
                } else {
                    buffer.stroke_ellipse_bounded(a, b, color, thick)
                }
            }
            Shape::BrushCursor { .. } => None,
        }
    }
}

fn bounding_box_for_line(from: Point, to: Point, thick: u32) -> Option<Rect> {
    let padding = i64::from(thick.max(1) / 2);
    let (min_x, min_y, max_x, max_y) = normalize_corners(from, to);
    Rect::from_extents(
        i64::from(min_x) - padding,
        i64::from(min_y) - padding,
        i64::from(max_x) + padding + 1,
        i64::from(max_y) + padding + 1,
    )
}
