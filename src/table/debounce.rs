//! Time-deferred input handling.
//!
//! Both types take the current `Instant` as a parameter instead of reading the
//! clock, so the event loop drives them with real time and tests drive them
//! with fixed offsets.

use super::selection::RowId;
use std::time::{Duration, Instant};

/// Trailing debouncer: a value is released once `delay` has passed since the
/// last push. Every push restarts the wait and replaces the pending value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Release the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, pushed_at)) if now.saturating_duration_since(*pushed_at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// When the pending value would be released, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, pushed_at)| *pushed_at + self.delay)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Detects two clicks on the same row within a short window.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    last: Option<(RowId, Instant)>,
}

impl ClickTracker {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Record a click on `row_id`. Returns `true` when it completes a double-click.
    pub fn register(&mut self, row_id: RowId, now: Instant) -> bool {
        match self.last.take() {
            Some((last_row, clicked_at))
                if last_row == row_id && now.saturating_duration_since(clicked_at) <= self.window =>
            {
                true
            }
            _ => {
                self.last = Some((row_id, now));
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
