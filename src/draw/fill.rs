//! Connected-region flood fill.

use super::buffer::PixelBuffer;
use super::color::Color;
use crate::util::{Point, Rect};

/// Result of a flood fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Number of pixels recolored
    pub changed: usize,
    /// Bounding box of the recolored pixels, `None` when nothing changed
    pub region: Option<Rect>,
}

/// Recolors the 4-connected region of same-colored pixels containing `seed`.
///
/// Pixels join the region only when their color is exactly equal to the
/// original seed color. Filling with the color already at the seed, or seeding
/// outside the buffer, changes nothing.
///
/// Uses an explicit work list, so the region size is bounded by the buffer area
/// rather than by stack depth. Each recolored pixel no longer matches the seed
/// color, which is what guarantees termination.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Point, new_color: Color) -> FillReport {
    let Ok(target) = buffer.get_point(seed) else {
        log::debug!("Flood fill seed {seed:?} outside buffer, ignoring");
        return FillReport::default();
    };
    if target == new_color {
        return FillReport::default();
    }

    let mut report = FillReport::default();
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (seed.x, seed.y, seed.x, seed.y);
    let mut stack = vec![seed];

    while let Some(Point { x, y }) = stack.pop() {
        if buffer.get(x, y) != Ok(target) {
            continue;
        }
        buffer.put_clipped(x, y, new_color);
        report.changed += 1;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);

        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if buffer.in_bounds(nx, ny) {
                stack.push(Point::new(nx, ny));
            }
        }
    }

    report.region = Rect::from_min_max(min_x, min_y, max_x + 1, max_y + 1);
    log::debug!(
        "Flood fill at {seed:?} recolored {} pixels to {}",
        report.changed,
        new_color.to_hex()
    );
    report
}
