#![forbid(unsafe_code)]

//! Quiet-window debouncing for bursty host notifications.
//!
//! Viewport resizes arrive as a flood while the user drags a window edge.
//! [`Debouncer`] collapses such a burst into a single firing that happens
//! only once no further notification arrived for the configured window.
//!
//! # Design
//!
//! Time is supplied by the caller as a monotonic [`Duration`] since an
//! arbitrary host epoch. The debouncer never sleeps, spawns, or reads a clock
//! itself, so it behaves identically on native and `wasm32` hosts and is
//! fully deterministic under test.
//!
//! # Invariants
//!
//! 1. At most one deadline is pending at any time.
//! 2. [`schedule`](Debouncer::schedule) while pending cancels the old deadline
//!    and restarts the window from `now`.
//! 3. [`poll`](Debouncer::poll) returns `true` exactly once per quiet period,
//!    and only when `now >= deadline`.
//!
//! # Usage
//!
//! ```
//! use slide_core::debounce::Debouncer;
//! use std::time::Duration;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debouncer::new(ms(200));
//!
//! d.schedule(ms(0));
//! d.schedule(ms(150)); // restarts the window
//! assert!(!d.poll(ms(300)));
//! assert!(d.poll(ms(350)));
//! assert!(!d.poll(ms(400)));
//! ```

use std::time::Duration;

/// Restartable one-shot deadline.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Duration>,
    /// Notifications folded into the pending firing.
    coalesced: u32,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            coalesced: 0,
        }
    }

    /// Register a notification at `now`, (re)starting the quiet window.
    pub fn schedule(&mut self, now: Duration) {
        if self.deadline.is_some() {
            crate::trace!(coalesced = self.coalesced, "debounce.restart");
        }
        self.deadline = Some(now.saturating_add(self.window));
        self.coalesced = self.coalesced.saturating_add(1);
    }

    /// Fire if the quiet window has elapsed.
    ///
    /// Returns `true` at most once per scheduled burst.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                crate::debug!(coalesced = self.coalesced, "debounce.fire");
                self.deadline = None;
                self.coalesced = 0;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.coalesced = 0;
    }

    /// Whether a firing is pending.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Deadline of the pending firing, if any.
    #[inline]
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Number of notifications folded into the pending firing.
    #[inline]
    #[must_use]
    pub const fn pending_count(&self) -> u32 {
        self.coalesced
    }

    /// Configured quiet window.
    #[inline]
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Change the quiet window. A pending deadline keeps its old value.
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn new_debouncer_is_idle() {
        let mut d = Debouncer::new(ms(200));
        assert!(!d.is_pending());
        assert!(!d.poll(ms(10_000)));
    }

    #[test]
    fn fires_after_window() {
        let mut d = Debouncer::new(ms(200));
        d.schedule(ms(100));
        assert_eq!(d.deadline(), Some(ms(300)));
        assert!(!d.poll(ms(299)));
        assert!(d.poll(ms(300)));
        assert!(!d.is_pending());
    }

    #[test]
    fn burst_collapses_into_one_firing() {
        let mut d = Debouncer::new(ms(200));
        for t in [0, 50, 100, 150, 190] {
            d.schedule(ms(t));
            assert!(!d.poll(ms(t)));
        }
        assert_eq!(d.pending_count(), 5);
        assert!(!d.poll(ms(389)));
        assert!(d.poll(ms(390)));
        assert!(!d.poll(ms(1_000)));
        assert_eq!(d.pending_count(), 0);
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d = Debouncer::new(ms(200));
        d.schedule(ms(0));
        d.cancel();
        assert!(!d.poll(ms(500)));
    }

    #[test]
    fn zero_window_fires_on_same_instant() {
        let mut d = Debouncer::new(Duration::ZERO);
        d.schedule(ms(5));
        assert!(d.poll(ms(5)));
    }

    #[test]
    fn set_window_applies_to_next_schedule() {
        let mut d = Debouncer::new(ms(200));
        d.schedule(ms(0));
        d.set_window(ms(1_000));
        assert_eq!(d.deadline(), Some(ms(200)));
        d.schedule(ms(10));
        assert_eq!(d.deadline(), Some(ms(1_010)));
        assert_eq!(d.window(), ms(1_000));
    }
}
