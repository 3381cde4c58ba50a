//! Repeat-aware playback queue
//!
//! Implements an ordered queue with a distinguished head:
//!
//! ```text
//! Currently Playing: index 0  ("current")
//! ─────────────────────────────
//! Up Next:
//!   - index 1
//!   - index 2
//!   - ...
//! ```
//!
//! Advancing (`shift`) either discards or rotates the front items,
//! depending on the active [`RepeatMode`]. Index-based removal never
//! touches index 0; the current item can only leave via `shift`.

use crate::error::{QueueError, Result};
use crate::types::{RepeatMode, ShiftOptions};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::fmt;

/// Ceiling applied to `remove_range` bounds (u32::MAX, splice convention)
const RANGE_BOUND_MAX: f64 = 4_294_967_295.0;

/// Ordered queue of items with repeat-mode-aware advancement
///
/// Index 0 is always the current item. The backing storage is private
/// and never handed out mutably, so its invariants cannot be bypassed
/// from outside.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Items in queue order; index 0 is current
    items: Vec<T>,

    /// Policy for items passed over during advancement
    repeat_mode: RepeatMode,

    /// Position of the current item within the full cycle
    /// (meaningful only under `RepeatAllIndex`)
    absolute_index: usize,
}

impl<T> Queue<T> {
    /// Create a new empty queue with repeat disabled
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            repeat_mode: RepeatMode::NoRepeat,
            absolute_index: 0,
        }
    }

    /// Number of items in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current item (index 0), if any
    pub fn current(&self) -> Option<&T> {
        self.items.first()
    }

    /// Position of the current item within the full cycle
    ///
    /// Under [`RepeatMode::RepeatAllIndex`] this tracks how far the queue
    /// has rotated, so a consumer can render "track 3 of 10" even though
    /// the current item is always at index 0. Under every other mode the
    /// current item *is* position 0.
    pub fn current_index(&self) -> usize {
        if self.repeat_mode == RepeatMode::RepeatAllIndex && !self.items.is_empty() {
            self.absolute_index % self.items.len()
        } else {
            0
        }
    }

    /// Active repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    /// Set the repeat mode
    ///
    /// Resets the absolute-position bookkeeping; the current item becomes
    /// position 0 of the new cycle.
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
        self.absolute_index = 0;
    }

    /// Set the repeat mode from its wire name
    ///
    /// Unknown names are ignored: the previous mode stays active and no
    /// error is raised. Frontends hand these strings through untrusted
    /// paths, so a bad name must not take the queue down.
    pub fn set_repeat_mode_name(&mut self, name: &str) {
        if let Some(mode) = RepeatMode::from_name(name) {
            self.set_repeat_mode(mode);
        }
    }

    /// Item at `index`, counting from the end for negative values
    ///
    /// `at(-1)` is the last item. Out-of-range indices return `None`
    /// without side effects.
    pub fn at(&self, index: i64) -> Option<&T> {
        let len = self.items.len() as i64;
        let index = if index < 0 { index + len } else { index };
        if (0..len).contains(&index) {
            self.items.get(index as usize)
        } else {
            None
        }
    }

    /// Add an item to the end of the queue
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Add an item to the front of the queue
    ///
    /// The item becomes current immediately.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Empty the queue
    ///
    /// The repeat mode is unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
        self.absolute_index = 0;
    }

    /// Advance the queue past one or more front items
    ///
    /// Under [`RepeatMode::RepeatOne`] with `ignore_repetition: false` the
    /// call is a no-op: the queue stays parked on the current item. This
    /// check runs before argument validation, so a repeat-one consumer
    /// never sees a count error for a call it asked to be ignored.
    ///
    /// Otherwise `times` must be positive. `NoRepeat` (and a forced
    /// advance under `RepeatOne`) discards the passed items permanently;
    /// the rotating modes move them to the tail, wrapping counts larger
    /// than the queue around.
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidShiftCount`] if `times` is zero or negative.
    pub fn shift(&mut self, options: ShiftOptions) -> Result<()> {
        if self.repeat_mode == RepeatMode::RepeatOne && !options.ignore_repetition {
            return Ok(());
        }
        if options.times <= 0 {
            return Err(QueueError::InvalidShiftCount(options.times));
        }
        if self.items.is_empty() {
            return Ok(());
        }

        let times = options.times as usize;
        match self.repeat_mode {
            RepeatMode::NoRepeat | RepeatMode::RepeatOne => {
                let dropped = times.min(self.items.len());
                self.items.drain(..dropped);
            }
            RepeatMode::RepeatAll => {
                let len = self.items.len();
                self.items.rotate_left(times % len);
            }
            RepeatMode::RepeatAllIndex => {
                let len = self.items.len();
                self.items.rotate_left(times % len);
                self.absolute_index = (self.absolute_index + times % len) % len;
            }
        }
        Ok(())
    }

    /// Remove and return the item at `index`
    ///
    /// Index 0 is head-protected: the current item can only be removed by
    /// advancing. Out-of-range indices (including 0) return `None` and
    /// leave the queue unchanged.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if (1..self.items.len()).contains(&index) {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove a batch of positions in one pass
    ///
    /// Indices are interpreted against the queue as it was when the call
    /// started. Out-of-range indices and index 0 are filtered out, the
    /// rest are deduplicated and removed in ascending order. Returns the
    /// removed items in ascending original position.
    pub fn remove_multi(&mut self, indices: &[usize]) -> Vec<T> {
        let len = self.items.len();
        let mut valid: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|index| (1..len).contains(index))
            .collect();
        valid.sort_unstable();
        valid.dedup();

        let mut removed = Vec::with_capacity(valid.len());
        for (already_removed, index) in valid.into_iter().enumerate() {
            removed.push(self.items.remove(index - already_removed));
        }
        removed
    }

    /// Remove a contiguous slice of the queue
    ///
    /// Bounds below 1 clamp to 1 (index 0 is head-protected here too),
    /// bounds above 4,294,967,295 clamp to that ceiling, and fractional
    /// bounds round up. Equal clamped bounds remove nothing. A reversed
    /// pair removes `[end, begin)`. Returns the removed items in their
    /// original order.
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidRangeBound`] if either bound is NaN, naming
    /// the offending argument.
    pub fn remove_range(&mut self, begin: f64, end: f64) -> Result<Vec<T>> {
        if begin.is_nan() {
            return Err(QueueError::InvalidRangeBound("begin"));
        }
        if end.is_nan() {
            return Err(QueueError::InvalidRangeBound("end"));
        }

        let begin = clamp_range_bound(begin);
        let end = clamp_range_bound(end);
        if begin == end {
            return Ok(Vec::new());
        }

        let (start, stop) = if end < begin { (end, begin) } else { (begin, end) };
        let len = self.items.len();
        Ok(self.items.drain(start.min(len)..stop.min(len)).collect())
    }

    /// Randomly permute every item except the current one
    ///
    /// Uniform Fisher–Yates over `items[1..]`; index 0 stays put.
    pub fn shuffle(&mut self) {
        if let Some(rest) = self.items.get_mut(1..) {
            rest.shuffle(&mut thread_rng());
        }
    }

    /// Remove every item matching `predicate`
    ///
    /// The predicate is called exactly once per item, in queue order.
    /// Relative order is preserved on both sides; returns the removed
    /// items in their original order.
    pub fn remove<F>(&mut self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());
        for item in std::mem::take(&mut self.items) {
            if predicate(&item) {
                removed.push(item);
            } else {
                kept.push(item);
            }
        }
        self.items = kept;
        removed
    }

    /// Iterate over the items in queue order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Snapshot of the queue in current order
    ///
    /// Mutating the returned vector does not affect the queue.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue({})", self.len())
    }
}

/// Clamp a `remove_range` bound to `[1, RANGE_BOUND_MAX]`, rounding
/// fractional values up
fn clamp_range_bound(value: f64) -> usize {
    if value < 1.0 {
        1
    } else if value > RANGE_BOUND_MAX {
        RANGE_BOUND_MAX as usize
    } else {
        value.ceil() as usize
    }
}
