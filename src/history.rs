//! Bounded undo/redo history of full-buffer snapshots.
//!
//! The history is an ordered list of [`Snapshot`]s plus a cursor pointing at
//! the entry that matches the live buffer. Pushing while the cursor is not at
//! the tail drops the redo branch; exceeding the capacity evicts the oldest
//! entry.

use crate::draw::{PixelBuffer, Snapshot};
use log::{debug, warn};
use std::collections::VecDeque;

/// Default number of snapshots kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Snapshot-based undo/redo manager.
#[derive(Debug)]
pub struct HistoryManager {
    entries: VecDeque<Snapshot>,
    /// Index of the current entry; meaningless while `entries` is empty
    cursor: usize,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryManager {
    /// Creates an empty history holding at most `capacity` snapshots (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, `None` before the first push.
    pub fn cursor(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor)
    }

    /// The snapshot the live buffer should currently match.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    /// Snapshot at a given position, oldest first.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.entries.get(index)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Records the buffer's current contents as the newest entry.
    pub fn push(&mut self, buffer: &PixelBuffer) {
        if !self.entries.is_empty() {
            let dropped = self.entries.len() - (self.cursor + 1);
            if dropped > 0 {
                debug!("Discarding {dropped} redo entries");
            }
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push_back(buffer.snapshot());
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            debug!("History full ({}), evicted oldest snapshot", self.capacity);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Steps back one entry and restores it into `buffer`.
    ///
    /// Returns `false` (and leaves the buffer alone) at the oldest entry.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.step_to(self.cursor - 1, buffer)
    }

    /// Steps forward one entry and restores it into `buffer`.
    ///
    /// Returns `false` (and leaves the buffer alone) at the newest entry.
    pub fn redo(&mut self, buffer: &mut PixelBuffer) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.step_to(self.cursor + 1, buffer)
    }

    fn step_to(&mut self, index: usize, buffer: &mut PixelBuffer) -> bool {
        let Some(snapshot) = self.entries.get(index) else {
            return false;
        };
        match buffer.restore(snapshot) {
            Ok(()) => {
                self.cursor = index;
                true
            }
            Err(err) => {
                warn!("Cannot restore history entry {index}: {err}");
                false
            }
        }
    }
}
