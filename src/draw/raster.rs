//! Rasterization primitives operating directly on a [`PixelBuffer`].
//!
//! Every primitive clips to the buffer bounds instead of failing, and returns
//! the damaged region (already clipped) so callers can track dirty areas.
//! `None` means no pixel inside the buffer was touched.

use super::buffer::{Composite, PixelBuffer};
use super::color::Color;
use crate::util::{Point, Rect, normalize_corners};

/// Disc radius used for freehand brush stamps: `max(1, size / 2)`.
///
/// Size 0 still yields a visible dot.
pub fn brush_radius(size: u32) -> u32 {
    (size / 2).max(1)
}

/// Outline width used when committing line and shape tools: `max(1, size / 4)`.
pub fn shape_line_width(size: u32) -> u32 {
    (size / 4).max(1)
}

impl PixelBuffer {
    /// Clipped damage rectangle for an inclusive pixel range.
    fn damage(&self, min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Option<Rect> {
        Rect::from_extents(min_x, min_y, max_x + 1, max_y + 1)?
            .clamped_to_bounds(self.width() as i32, self.height() as i32)
    }

    /// Damage for the inclusive pixel range spanned by two corners.
    fn corner_damage(&self, a: Point, b: Point) -> Option<Rect> {
        let (min_x, min_y, max_x, max_y) = normalize_corners(a, b);
        self.damage(
            i64::from(min_x),
            i64::from(min_y),
            i64::from(max_x),
            i64::from(max_y),
        )
    }

    /// Rasterizes a filled disc of `radius` pixels centered on `center`.
    ///
    /// A pixel is covered when its offset `(dx, dy)` from the center satisfies
    /// `dx² + dy² <= radius²`; radius 0 covers only the center pixel.
    pub fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: Color,
        composite: Composite,
    ) -> Option<Rect> {
        let value = composite.resolve(color);
        let r = i64::from(radius.min(i32::MAX as u32 / 2));
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let damage = self.damage(cx - r, cy - r, cx + r, cy + r)?;

        let r2 = r * r;
        for y in damage.y..damage.y + damage.height {
            let dy = i64::from(y) - cy;
            for x in damage.x..damage.x + damage.width {
                let dx = i64::from(x) - cx;
                if dx * dx + dy * dy <= r2 {
                    self.put_clipped(x, y, value);
                }
            }
        }
        Some(damage)
    }

    /// Draws a thick segment by stamping discs along a Bresenham walk.
    ///
    /// Consecutive Bresenham samples are 8-adjacent. With `radius >= 1` (as
    /// the brush always uses) the union of stamps is 4-connected whatever the
    /// slope or direction. Radius 0 yields a plain 8-connected line.
    ///
    /// The segment is first clipped to the buffer grown by the stamp radius,
    /// so only steps whose disc can reach a pixel are walked.
    pub fn stroke_segment(
        &mut self,
        from: Point,
        to: Point,
        radius: u32,
        color: Color,
        composite: Composite,
    ) -> Option<Rect> {
        let margin = f64::from(radius) + 1.0;
        let reach = (
            -margin,
            -margin,
            f64::from(self.width()) - 1.0 + margin,
            f64::from(self.height()) - 1.0 + margin,
        );
        let (from, to) = clip_segment(from, to, reach)?;

        let mut damage: Option<Rect> = None;
        for point in bresenham(from, to) {
            if let Some(rect) = self.fill_circle(point, radius, color, composite) {
                damage = Some(damage.map_or(rect, |acc| acc.union(rect)));
            }
        }
        damage
    }

    /// Fills the rectangle spanned by two corner pixels (inclusive, any order).
    pub fn fill_rect(&mut self, a: Point, b: Point, color: Color) -> Option<Rect> {
        let damage = self.corner_damage(a, b)?;
        for y in damage.y..damage.y + damage.height {
            for x in damage.x..damage.x + damage.width {
                self.put_clipped(x, y, color);
            }
        }
        Some(damage)
    }

    /// Draws a rectangle border `thickness` pixels wide, inset inside the corners.
    ///
    /// When the border is thicker than half the rectangle the result is solid.
    pub fn stroke_rect(
        &mut self,
        a: Point,
        b: Point,
        color: Color,
        thickness: u32,
    ) -> Option<Rect> {
        let (min_x, min_y, max_x, max_y) = normalize_corners(a, b);
        let damage = self.corner_damage(a, b)?;
        let t = i64::from(thickness.max(1));
        for y in damage.y..damage.y + damage.height {
            for x in damage.x..damage.x + damage.width {
                let edge = (i64::from(x) - i64::from(min_x))
                    .min(i64::from(max_x) - i64::from(x))
                    .min(i64::from(y) - i64::from(min_y))
                    .min(i64::from(max_y) - i64::from(y));
                if edge < t {
                    self.put_clipped(x, y, color);
                }
            }
        }
        Some(damage)
    }

    /// Fills the ellipse inscribed in the rectangle spanned by two corners.
    ///
    /// Degenerate (zero-width or zero-height) bounds produce a straight run of
    /// pixels rather than nothing.
    pub fn fill_ellipse_bounded(&mut self, a: Point, b: Point, color: Color) -> Option<Rect> {
        let ellipse = InscribedEllipse::new(a, b);
        let damage = self.corner_damage(a, b)?;
        for y in damage.y..damage.y + damage.height {
            for x in damage.x..damage.x + damage.width {
                if ellipse.contains(x, y, 0.0) {
                    self.put_clipped(x, y, color);
                }
            }
        }
        Some(damage)
    }

    /// Draws the outline of the inscribed ellipse, `thickness` pixels wide.
    pub fn stroke_ellipse_bounded(
        &mut self,
        a: Point,
        b: Point,
        color: Color,
        thickness: u32,
    ) -> Option<Rect> {
        let ellipse = InscribedEllipse::new(a, b);
        let inset = f64::from(thickness.max(1));
        let damage = self.corner_damage(a, b)?;
        for y in damage.y..damage.y + damage.height {
            for x in damage.x..damage.x + damage.width {
                if ellipse.contains(x, y, 0.0) && !ellipse.contains(x, y, inset) {
                    self.put_clipped(x, y, color);
                }
            }
        }
        Some(damage)
    }

    /// Draws a straight line `thickness` pixels wide.
    ///
    /// Thickness below 2 is a plain single-pixel Bresenham line, which is
    /// 8-connected on diagonals.
    pub fn stroke_line(
        &mut self,
        a: Point,
        b: Point,
        color: Color,
        thickness: u32,
    ) -> Option<Rect> {
        self.stroke_segment(a, b, thickness.max(1) / 2, color, Composite::Paint)
    }
}

/// Ellipse inscribed in an inclusive pixel rectangle, tested at pixel centers.
struct InscribedEllipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl InscribedEllipse {
    fn new(a: Point, b: Point) -> Self {
        let (min_x, min_y, max_x, max_y) = normalize_corners(a, b);
        let (fx0, fy0, fx1, fy1) = (
            f64::from(min_x),
            f64::from(min_y),
            f64::from(max_x),
            f64::from(max_y),
        );
        Self {
            cx: (fx0 + fx1) / 2.0,
            cy: (fy0 + fy1) / 2.0,
            rx: (fx1 - fx0) / 2.0 + 0.5,
            ry: (fy1 - fy0) / 2.0 + 0.5,
        }
    }

    /// Tests a pixel against the ellipse shrunk by `inset` on each radius.
    fn contains(&self, x: i32, y: i32, inset: f64) -> bool {
        let rx = self.rx - inset;
        let ry = self.ry - inset;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (f64::from(x) - self.cx) / rx;
        let ny = (f64::from(y) - self.cy) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

/// Clips the segment `from..to` to the box `(min_x, min_y, max_x, max_y)`.
///
/// Liang-Barsky in parametric form. Endpoints inside the box are returned
/// unchanged; clipped ones are rounded to the nearest pixel. `None` when the
/// segment misses the box entirely.
fn clip_segment(
    from: Point,
    to: Point,
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> Option<(Point, Point)> {
    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let at = |t: f64| Point::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    let start = if t0 > 0.0 { at(t0) } else { from };
    let end = if t1 < 1.0 { at(t1) } else { to };
    Some((start, end))
}

/// Integer line walk from `from` to `to`, both endpoints included.
fn bresenham(from: Point, to: Point) -> impl Iterator<Item = Point> {
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let dx = (x1 - i64::from(from.x)).abs();
    let dy = (y1 - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) / 2;
    let mut cursor = Some((i64::from(from.x), i64::from(from.y)));

    std::iter::from_fn(move || {
        let (x, y) = cursor?;
        cursor = if x == x1 && y == y1 {
            None
        } else {
            let (mut nx, mut ny) = (x, y);
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                nx += sx;
            }
            if e2 < dy {
                err += dx;
                ny += sy;
            }
            Some((nx, ny))
        };
        Some(Point::new(x as i32, y as i32))
    })
}
