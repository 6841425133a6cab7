//! Editable canvas: the live pixel buffer plus its undo history.

use super::{DirtyTracker, PixelBuffer, Shape, TRANSPARENT};
use crate::history::HistoryManager;
use crate::util::Rect;

/// Owns the committed image together with its snapshot history.
///
/// All buffer mutations go through [`Canvas::apply`] so the damaged area is
/// recorded for the renderer. A fresh canvas already holds one history entry
/// (the blank image), so the first edit can be undone.
#[derive(Debug)]
pub struct Canvas {
    buffer: PixelBuffer,
    history: HistoryManager,
    dirty: DirtyTracker,
}

impl Canvas {
    /// Creates a transparent canvas and records it as the first history entry.
    pub fn new(width: u32, height: u32, history_capacity: usize) -> Self {
        let buffer = PixelBuffer::new(width, height);
        let mut history = HistoryManager::new(history_capacity);
        history.push(&buffer);
        let mut dirty = DirtyTracker::new();
        dirty.mark_full();
        Self {
            buffer,
            history,
            dirty,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Runs a mutation against the buffer and records the damage it reports.
    pub fn apply<F>(&mut self, edit: F) -> Option<Rect>
    where
        F: FnOnce(&mut PixelBuffer) -> Option<Rect>,
    {
        let damage = edit(&mut self.buffer);
        self.dirty.mark_optional_rect(damage);
        damage
    }

    /// Records the area under an overlay shape (preview, cursor) for repaint.
    pub fn mark_shape(&mut self, shape: &Shape) {
        self.dirty.mark_shape(shape);
    }

    /// Snapshots the buffer as a completed edit.
    pub fn commit(&mut self) {
        self.history.push(&self.buffer);
    }

    /// Restores the previous history entry. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.buffer);
        if undone {
            self.dirty.mark_full();
        }
        undone
    }

    /// Restores the next history entry. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.buffer);
        if redone {
            self.dirty.mark_full();
        }
        redone
    }

    /// Erases the whole image to transparency as a single undoable edit.
    pub fn clear(&mut self) {
        self.buffer.fill(TRANSPARENT);
        self.dirty.mark_full();
        self.commit();
    }

    /// Drains the regions changed since the last call.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        self.dirty.take_regions(width, height)
    }
}
