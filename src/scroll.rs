//! Mouse wheel accumulation for the icon grid.
//!
//! Trackpads emit bursts of small wheel events. Grid rows are tall, so wheel
//! notches are accumulated and converted into whole-row steps; a pause longer
//! than the debounce window discards any partial step.

use std::time::{Duration, Instant};

/// Converts wheel notches into grid row steps.
#[derive(Debug, Clone)]
pub struct ScrollHelper {
    /// Notches accumulated since the last emitted step
    pending: i32,
    /// Time of the last wheel event
    last_event: Option<Instant>,
    /// Window after which a partial step is discarded
    debounce: Duration,
    /// Notches needed for one row
    notches_per_row: i32,
}

impl Default for ScrollHelper {
    fn default() -> Self {
        Self::new(150, 1)
    }
}

impl ScrollHelper {
    /// # Arguments
    /// * `debounce_ms` - Pause after which pending notches are dropped
    /// * `notches_per_row` - Wheel notches that make up one grid row
    pub fn new(debounce_ms: u64, notches_per_row: i32) -> Self {
        Self {
            pending: 0,
            last_event: None,
            debounce: Duration::from_millis(debounce_ms),
            notches_per_row: notches_per_row.max(1),
        }
    }

    /// Record one wheel event of `notches` (negative is up) at `now`.
    ///
    /// Returns the number of rows to scroll, if at least one full row has
    /// accumulated.
    pub fn accumulate_at(&mut self, notches: i32, now: Instant) -> Option<i32> {
        let stale = self
            .last_event
            .is_some_and(|last| now.duration_since(last) > self.debounce);
        let reversed = self.pending.signum() * notches.signum() < 0;
        if stale || reversed {
            self.pending = 0;
        }
        self.pending += notches;
        self.last_event = Some(now);

        let rows = self.pending / self.notches_per_row;
        if rows == 0 {
            return None;
        }
        self.pending -= rows * self.notches_per_row;
        Some(rows)
    }

    /// Record one wheel event now.
    pub fn accumulate(&mut self, notches: i32) -> Option<i32> {
        self.accumulate_at(notches, Instant::now())
    }

    /// Drop any partial step.
    pub fn reset(&mut self) {
        self.pending = 0;
        self.last_event = None;
    }
}
