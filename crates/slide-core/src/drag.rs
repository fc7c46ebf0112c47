#![forbid(unsafe_code)]

//! Drag tracking: converts a raw horizontal coordinate stream into a scaled
//! track displacement.
//!
//! [`DragTracker`] owns the [`DragState`] of the carousel track. It is told
//! where a gesture started, receives every move, and commits the live
//! position when the gesture ends. It knows nothing about panels or the
//! rendering surface.
//!
//! # Invariants
//!
//! 1. While a gesture is active, `move_position == movement + final_position`.
//! 2. After [`commit`](DragTracker::commit), `final_position == move_position`
//!    and `movement` keeps the last gesture's value until the next
//!    [`begin`](DragTracker::begin) or [`settle`](DragTracker::settle).
//! 3. `begin` always resets `movement` to zero, so a tap after a swipe never
//!    inherits the previous swipe's displacement.
//!
//! # Failure Modes
//!
//! - `update` or `commit` without an active gesture are no-ops.
//! - A gesture whose end event never arrives stays active until the next
//!   `begin`, which simply restarts it.

/// Default drag amplification ("rubber-band speed").
pub const DEFAULT_DRAG_MULTIPLIER: f64 = 1.5;

/// Raw pointer-movement state of the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Coordinate where the current gesture started.
    pub start_x: f64,
    /// Signed, scaled displacement since gesture start.
    pub movement: f64,
    /// Live (uncommitted) translation during a gesture.
    pub move_position: f64,
    /// Committed translation of the track at rest.
    pub final_position: f64,
}

/// Tracks one gesture at a time and scales its displacement.
#[derive(Debug, Clone)]
pub struct DragTracker {
    state: DragState,
    multiplier: f64,
    active: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_MULTIPLIER)
    }
}

impl DragTracker {
    /// Create a tracker with the given movement multiplier.
    #[must_use]
    pub fn new(multiplier: f64) -> Self {
        Self {
            state: DragState::default(),
            multiplier,
            active: false,
        }
    }

    /// Record the gesture origin and reset the displacement.
    pub fn begin(&mut self, start_x: f64) {
        self.state.start_x = start_x;
        self.state.movement = 0.0;
        self.state.move_position = self.state.final_position;
        self.active = true;
        crate::trace!(start_x, "drag.begin");
    }

    /// Feed the current coordinate; returns the live track translation.
    ///
    /// Without an active gesture the current `move_position` is returned
    /// unchanged.
    pub fn update(&mut self, current_x: f64) -> f64 {
        if !self.active {
            return self.state.move_position;
        }
        self.state.movement = (current_x - self.state.start_x) * self.multiplier;
        self.state.move_position = self.state.movement + self.state.final_position;
        self.state.move_position
    }

    /// Commit the live translation and end the gesture.
    ///
    /// Returns the committed position, or `None` if no gesture was active.
    pub fn commit(&mut self) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.state.final_position = self.state.move_position;
        crate::trace!(
            movement = self.state.movement,
            final_position = self.state.final_position,
            "drag.commit"
        );
        Some(self.state.final_position)
    }

    /// Settle the track at `position` (used when a panel becomes active).
    ///
    /// Clears the displacement, so a gesture still in progress continues
    /// from the new position on its next update.
    pub fn settle(&mut self, position: f64) {
        self.state.movement = 0.0;
        self.state.move_position = position;
        self.state.final_position = position;
    }

    /// Whether a gesture is in progress.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Scaled displacement of the current (or last) gesture.
    #[inline]
    #[must_use]
    pub const fn movement(&self) -> f64 {
        self.state.movement
    }

    /// Snapshot of the full drag state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Configured movement multiplier.
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Change the movement multiplier; takes effect on the next update.
    pub fn set_multiplier(&mut self, multiplier: f64) {
        self.multiplier = multiplier;
    }
}
