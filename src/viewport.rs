//! Screen/model coordinate mapping with zoom and pan.
//!
//! The viewport maps model (pixel) space onto the input/display surface as
//! `screen = model * zoom + pan`. Zoom is clamped to [`MIN_ZOOM`, `MAX_ZOOM`];
//! pan is unconstrained, so the image may be moved fully off-screen.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Smallest permitted zoom factor.
pub const MIN_ZOOM: f64 = 0.25;
/// Largest permitted zoom factor.
pub const MAX_ZOOM: f64 = 8.0;

/// A real-valued position on the input/display surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamps a zoom factor into the permitted range. NaN falls back to 1.0.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        1.0
    } else {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}

/// Zoom factor and pan offset of the editor view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: ScreenPoint,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Viewport {
    /// Creates a viewport with the given (clamped) zoom and no pan.
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            pan: ScreenPoint::default(),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Screen position of the model origin.
    pub fn pan(&self) -> ScreenPoint {
        self.pan
    }

    pub fn set_pan(&mut self, pan: ScreenPoint) {
        self.pan = pan;
    }

    /// Moves the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Maps a screen position to the nearest model pixel.
    pub fn screen_to_model(&self, screen: ScreenPoint) -> Point {
        let (x, y) = self.screen_to_model_exact(screen);
        // `as` saturates, so far-off pointers stay representable.
        Point::new(x.round() as i32, y.round() as i32)
    }

    /// Maps a screen position to unrounded model coordinates.
    pub fn screen_to_model_exact(&self, screen: ScreenPoint) -> (f64, f64) {
        (
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// Maps a model pixel to its screen position.
    pub fn model_to_screen(&self, model: Point) -> ScreenPoint {
        ScreenPoint::new(
            f64::from(model.x) * self.zoom + self.pan.x,
            f64::from(model.y) * self.zoom + self.pan.y,
        )
    }

    /// Sets the zoom without moving the pan offset.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Changes the zoom while keeping the model point under `anchor` fixed.
    ///
    /// The requested zoom is clamped first; the pan is then solved from
    /// `pan' = anchor - (anchor - pan) * (zoom' / zoom)`.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, new_zoom: f64) {
        let old = self.zoom;
        let new = clamp_zoom(new_zoom);
        let ratio = new / old;
        self.pan.x = anchor.x - (anchor.x - self.pan.x) * ratio;
        self.pan.y = anchor.y - (anchor.y - self.pan.y) * ratio;
        self.zoom = new;
    }

    /// Pans so a `model_width` x `model_height` image is centered on a surface.
    pub fn center_in(
        &mut self,
        surface_width: f64,
        surface_height: f64,
        model_width: u32,
        model_height: u32,
    ) {
        self.pan.x = (surface_width - f64::from(model_width) * self.zoom) / 2.0;
        self.pan.y = (surface_height - f64::from(model_height) * self.zoom) / 2.0;
    }
}
