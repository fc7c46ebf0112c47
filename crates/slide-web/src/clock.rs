#![forbid(unsafe_code)]

//! Monotonic time sources for the host adapter.

use core::time::Duration;

/// Monotonic clock read by [`SlideHost`](crate::SlideHost) before every
/// dispatch.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now_mono(&self) -> Duration;
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

impl Clock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}

/// Wall clock backed by `web_time::Instant` (native and `wasm32`).
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: web_time::Instant,
}

impl WallClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now_mono(&self) -> Duration {
        self.origin.elapsed()
    }
}
