//! Editor session: one canvas, its viewport, and the tool state driving it.
//!
//! The session is the single owner of all mutable editor state. Input surfaces
//! feed it screen-space [`PointerEvent`]s and commands; renderers read the
//! buffer, preview shape, and viewport back out of it.

mod script;

pub use script::{Script, ScriptError, Step};

use crate::config::{ColorSpec, Config};
use crate::draw::{Canvas, Color, PixelBuffer, Shape};
use crate::input::{GestureEvent, MouseButton, PointerEvent, Tool, ToolController};
use crate::util::Rect;
use crate::viewport::{ScreenPoint, Viewport};
use log::{debug, info, warn};
use std::fmt;

#[cfg(test)]
mod tests;

/// Snapshot of the values shown in the status HUD.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    pub tool: Tool,
    pub color: Color,
    pub thickness: u32,
    pub zoom: f64,
}

impl SessionStatus {
    /// Zoom as a whole percentage.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}%",
            self.tool.label(),
            self.color.to_hex().to_uppercase(),
            self.thickness,
            self.zoom_percent()
        )
    }
}

/// Interactive editing state for one image.
#[derive(Debug)]
pub struct EditorSession {
    canvas: Canvas,
    viewport: Viewport,
    tools: ToolController,
    show_grid: bool,
    grid_spacing: u32,
    wheel_step: f64,
    key_step: f64,
    /// Last pointer position of an active middle-button pan
    pan_drag: Option<ScreenPoint>,
    needs_redraw: bool,
}

impl EditorSession {
    /// Creates a session with default settings and a blank `width` x `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        let mut config = Config::default();
        config.canvas.width = width;
        config.canvas.height = height;
        Self::from_config(&config)
    }

    /// Creates a session from (already validated) configuration.
    pub fn from_config(config: &Config) -> Self {
        let color = config.drawing.default_color.to_color().unwrap_or_else(|| {
            warn!(
                "Unusable default color {:?}, using charcoal",
                config.drawing.default_color
            );
            crate::draw::CHARCOAL
        });
        let tools = ToolController::new(
            config.drawing.default_tool,
            color,
            config.drawing.default_thickness,
        )
        .with_fill_shapes(config.drawing.fill_shapes);

        info!(
            "New {}x{} canvas, history capacity {}",
            config.canvas.width, config.canvas.height, config.history.capacity
        );

        Self {
            canvas: Canvas::new(
                config.canvas.width,
                config.canvas.height,
                config.history.capacity,
            ),
            viewport: Viewport::new(config.viewport.initial_zoom),
            tools,
            show_grid: config.ui.show_grid,
            grid_spacing: config.ui.grid_spacing.max(1),
            wheel_step: config.viewport.wheel_step,
            key_step: config.viewport.key_step,
            pan_drag: None,
            needs_redraw: true,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn buffer(&self) -> &PixelBuffer {
        self.canvas.buffer()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    /// Preview of the gesture in progress, drawn above the buffer.
    pub fn provisional_shape(&self) -> Option<Shape> {
        self.tools.provisional_shape()
    }

    pub fn is_panning(&self) -> bool {
        self.pan_drag.is_some()
    }

    /// Feeds one screen-space pointer event into the session.
    ///
    /// Middle button drags pan the view. Primary button gestures are mapped to
    /// model space and drive the active tool. The secondary button is ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Begin { pos, button } => match button {
                MouseButton::Middle => {
                    if self.tools.is_drawing() {
                        debug!("Ignoring pan start during a gesture");
                    } else {
                        self.pan_drag = Some(pos);
                    }
                }
                MouseButton::Left => {
                    if self.pan_drag.is_some() {
                        debug!("Ignoring press while panning");
                        return;
                    }
                    let point = self.viewport.screen_to_model(pos);
                    self.drive_tool(GestureEvent::Begin(point));
                }
                MouseButton::Right => {}
            },
            PointerEvent::Move { pos } => {
                if let Some(last) = self.pan_drag {
                    self.viewport.pan_by(pos.x - last.x, pos.y - last.y);
                    self.pan_drag = Some(pos);
                    self.needs_redraw = true;
                } else if self.tools.is_drawing() {
                    let point = self.viewport.screen_to_model(pos);
                    self.drive_tool(GestureEvent::Move(point));
                }
            }
            PointerEvent::End { pos } => {
                if self.pan_drag.take().is_some() {
                    return;
                }
                if self.tools.is_drawing() {
                    let point = self.viewport.screen_to_model(pos);
                    self.drive_tool(GestureEvent::End(point));
                }
            }
            PointerEvent::Leave => {
                self.pan_drag = None;
                if self.tools.is_drawing() {
                    self.mark_preview();
                    self.tools.on_leave(&mut self.canvas);
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Forwards a model-space gesture event, repainting the preview it replaces.
    fn drive_tool(&mut self, event: GestureEvent) {
        self.mark_preview();
        self.tools.handle(&mut self.canvas, event);
        self.mark_preview();
        self.needs_redraw = true;
    }

    fn mark_preview(&mut self) {
        if let Some(shape) = self.tools.provisional_shape() {
            self.canvas.mark_shape(&shape);
        }
    }

    /// Zooms by one wheel notch toward `anchor`, opposite to the sign of `delta_y`.
    pub fn on_wheel(&mut self, anchor: ScreenPoint, delta_y: f64) {
        if delta_y == 0.0 || delta_y.is_nan() {
            return;
        }
        let target = self.viewport.zoom() - delta_y.signum() * self.wheel_step;
        self.viewport.zoom_at(anchor, target);
        debug!("Wheel zoom to {:.2}", self.viewport.zoom());
        self.needs_redraw = true;
    }

    pub fn zoom_in(&mut self) {
        self.viewport.set_zoom(self.viewport.zoom() + self.key_step);
        self.needs_redraw = true;
    }

    pub fn zoom_out(&mut self) {
        self.viewport.set_zoom(self.viewport.zoom() - self.key_step);
        self.needs_redraw = true;
    }

    /// Moves the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
        self.needs_redraw = true;
    }

    /// Centers the image in a surface of the given size at the current zoom.
    pub fn center_in(&mut self, surface_width: f64, surface_height: f64) {
        self.viewport.center_in(
            surface_width,
            surface_height,
            self.canvas.width(),
            self.canvas.height(),
        );
        self.needs_redraw = true;
    }

    /// Steps back one history entry. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let undone = self.canvas.undo();
        if undone {
            self.needs_redraw = true;
        } else {
            debug!("Nothing to undo");
        }
        undone
    }

    /// Steps forward one history entry. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        let redone = self.canvas.redo();
        if redone {
            self.needs_redraw = true;
        } else {
            debug!("Nothing to redo");
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.canvas.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.canvas.history().can_redo()
    }

    /// Erases the image as one undoable edit.
    pub fn clear(&mut self) {
        self.canvas.clear();
        info!("Canvas cleared");
        self.needs_redraw = true;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
        self.needs_redraw = true;
    }

    /// Applies a color specification.
    ///
    /// Returns false and keeps the previous color when the specification
    /// cannot be resolved.
    pub fn set_color(&mut self, spec: &ColorSpec) -> bool {
        match spec.to_color() {
            Some(color) => {
                self.tools.set_color(color);
                self.needs_redraw = true;
                true
            }
            None => {
                warn!(
                    "Ignoring malformed color {spec:?}, keeping {}",
                    self.tools.color().to_hex()
                );
                false
            }
        }
    }

    pub fn set_thickness(&mut self, thickness: u32) {
        self.tools.set_thickness(thickness);
        self.needs_redraw = true;
    }

    pub fn adjust_thickness(&mut self, delta: i32) {
        self.tools.adjust_thickness(delta);
        self.needs_redraw = true;
    }

    /// Flips the grid overlay flag. Purely cosmetic.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.needs_redraw = true;
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Whether a renderer should draw the grid now; it is hidden at or below 100%.
    pub fn grid_visible(&self) -> bool {
        self.show_grid && self.viewport.zoom() > 1.0
    }

    pub fn grid_spacing(&self) -> u32 {
        self.grid_spacing
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            tool: self.tools.tool(),
            color: self.tools.color(),
            thickness: self.tools.thickness(),
            zoom: self.viewport.zoom(),
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Hands the pending damage to a renderer and resets the redraw flag.
    pub fn take_redraw(&mut self) -> Vec<Rect> {
        self.needs_redraw = false;
        self.canvas.take_dirty_regions()
    }
}
