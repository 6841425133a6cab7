//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles of the buffer that changed since the
//! renderer last drained them.

use super::Shape;
use crate::util::Rect;

/// Pending rectangles kept before the tracker gives up and repaints everything.
pub const MAX_REGIONS: usize = 64;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    ///
    /// Once [`MAX_REGIONS`] rectangles are pending, the tracker collapses to
    /// full-surface damage, so an undrained tracker stays bounded.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        if self.regions.len() >= MAX_REGIONS {
            self.mark_full();
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present.
    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Adds the bounding box for the given shape, or full damage if none is available.
    pub fn mark_shape(&mut self, shape: &Shape) {
        match shape.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true if anything is waiting to be repainted.
    pub fn is_dirty(&self) -> bool {
        self.force_full || !self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns the accumulated rectangles clipped to
    /// the surface, dropping any that lie wholly outside it.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            Rect::new(0, 0, width, height).into_iter().collect()
        } else {
            self.regions
                .drain(..)
                .filter_map(|rect| rect.clamped_to_bounds(width, height))
                .collect()
        }
    }
}
