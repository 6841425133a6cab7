use crate::draw::{Canvas, brush_radius, flood_fill};
use crate::input::events::GestureEvent;
use crate::input::tool::Tool;
use crate::util::Point;
use log::debug;

use super::{DrawingState, ToolController};

impl ToolController {
    /// Dispatches one model-space gesture event.
    pub fn handle(&mut self, canvas: &mut Canvas, event: GestureEvent) {
        match event {
            GestureEvent::Begin(point) => self.on_begin(canvas, point),
            GestureEvent::Move(point) => self.on_move(canvas, point),
            GestureEvent::End(point) => self.on_end(canvas, point),
        }
    }

    /// Processes a press at `point` (model space).
    ///
    /// # Behavior
    /// - Color picker: samples the pixel into the active color, stays Idle
    /// - Fill: flood-fills from the point, records one history entry, stays Idle
    /// - Freehand tools: opens a gesture and stamps the first dot
    /// - Shape tools: opens a gesture; nothing is drawn until release
    ///
    /// A press while a gesture is already open is ignored.
    pub fn on_begin(&mut self, canvas: &mut Canvas, point: Point) {
        if self.is_drawing() {
            debug!("Ignoring press at {point:?}: gesture already open");
            return;
        }

        match self.tool {
            Tool::ColorPicker => match canvas.buffer().get_point(point) {
                Ok(sampled) => {
                    debug!("Picked {} at {point:?}", sampled.to_hex());
                    self.set_color(sampled);
                }
                Err(err) => debug!("Color pick ignored: {err}"),
            },
            Tool::Fill => {
                let color = self.color;
                canvas.apply(|buffer| flood_fill(buffer, point, color).region);
                canvas.commit();
            }
            tool => {
                if tool.is_freehand() {
                    let (radius, color) = (brush_radius(self.thickness), self.color);
                    canvas.apply(|buffer| {
                        buffer.fill_circle(point, radius, color, tool.composite())
                    });
                }
                self.state = DrawingState::Drawing {
                    tool,
                    origin: point,
                    current: point,
                };
            }
        }
    }

    /// Processes pointer motion to `point` while a gesture may be open.
    ///
    /// Freehand tools stroke from the previous point straight into the buffer;
    /// shape tools only track the point for the preview. Motion while Idle is
    /// ignored.
    pub fn on_move(&mut self, canvas: &mut Canvas, point: Point) {
        let DrawingState::Drawing { tool, current, .. } = &mut self.state else {
            return;
        };

        if tool.is_freehand() {
            let (from, tool) = (*current, *tool);
            let (radius, color) = (brush_radius(self.thickness), self.color);
            canvas.apply(|buffer| {
                buffer.stroke_segment(from, point, radius, color, tool.composite())
            });
        }
        *current = point;
    }

    /// Processes a release at `point`, closing the gesture.
    ///
    /// Shape tools rasterize origin→`point` now. Every completed gesture
    /// records exactly one history entry. A release while Idle is ignored.
    pub fn on_end(&mut self, canvas: &mut Canvas, point: Point) {
        let DrawingState::Drawing { tool, origin, .. } = self.state else {
            return;
        };

        if tool.is_shape() {
            if let Some(shape) = self.shape_between(tool, origin, point) {
                canvas.apply(|buffer| shape.rasterize(buffer));
            }
        }

        self.state = DrawingState::Idle;
        canvas.commit();
    }

    /// Closes an abandoned gesture as if released at its last known point.
    pub fn on_leave(&mut self, canvas: &mut Canvas) {
        if let DrawingState::Drawing { current, .. } = self.state {
            debug!("Pointer left surface, ending gesture at {current:?}");
            self.on_end(canvas, current);
        }
    }
}
