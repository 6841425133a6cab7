use crate::draw::{Shape, brush_radius, shape_line_width};
use crate::input::tool::Tool;
use crate::util::Point;

use super::{DrawingState, ToolController};

impl ToolController {
    /// Returns the preview shape for the gesture in progress.
    ///
    /// # Returns
    /// - Line/rect/ellipse anchored at the gesture origin and current point
    /// - The brush footprint at the current point for freehand tools
    /// - `None` while idle
    ///
    /// The renderer draws this on top of the committed buffer; it is never
    /// written into the buffer itself.
    pub fn provisional_shape(&self) -> Option<Shape> {
        let DrawingState::Drawing {
            tool,
            origin,
            current,
        } = self.state
        else {
            return None;
        };

        if tool.is_freehand() {
            return Some(Shape::BrushCursor {
                center: current,
                radius: brush_radius(self.thickness),
                color: self.color,
                composite: tool.composite(),
            });
        }
        self.shape_between(tool, origin, current)
    }

    /// Builds the shape a shape tool produces between two corners.
    pub(crate) fn shape_between(&self, tool: Tool, a: Point, b: Point) -> Option<Shape> {
        let thick = shape_line_width(self.thickness);
        let color = self.color;
        match tool {
            Tool::Line => Some(Shape::Line {
                from: a,
                to: b,
                color,
                thick,
            }),
            Tool::Rectangle => Some(Shape::Rect {
                a,
                b,
                color,
                thick,
                filled: self.fill_shapes,
            }),
            Tool::Ellipse => Some(Shape::Ellipse {
                a,
                b,
                color,
                thick,
                filled: self.fill_shapes,
            }),
            _ => None,
        }
    }
}
