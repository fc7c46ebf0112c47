#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts unify their pointer models (mouse, touch) into [`SlideEvent`] values
//! before handing them to the engine. The engine only cares about the gesture
//! phase and a single horizontal coordinate; the [`InputOrigin`] is kept so
//! the engine can apply the per-device transition policy.
//!
//! # Design Notes
//!
//! - Coordinates are host pixels (`f64`), already relative to whatever frame
//!   the host measures panel offsets in.
//! - `GestureEnd` carries no coordinate: the decision at gesture end uses the
//!   movement accumulated from the last move event.
//! - `Resize` carries the new viewport width for diagnostics only; geometry is
//!   re-measured from the surface when the debounced relayout fires.

/// Which pointer model produced a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOrigin {
    /// Mouse or pen (`mousedown` / `mousemove` / `mouseup`).
    Pointer,
    /// Touch screen (`touchstart` / `touchmove` / `touchend`).
    Touch,
}

impl InputOrigin {
    /// Stable lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Touch => "touch",
        }
    }
}

/// Lifecycle phase of a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

/// Canonical input event delivered to the slide engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideEvent {
    /// A gesture began at horizontal coordinate `x`.
    GestureStart {
        /// Horizontal coordinate of the contact point.
        x: f64,
        /// Device that produced the gesture.
        origin: InputOrigin,
    },

    /// The contact point moved during a gesture.
    GestureMove {
        /// Horizontal coordinate of the contact point.
        x: f64,
        /// Device that produced the gesture.
        origin: InputOrigin,
    },

    /// The gesture ended (button released / finger lifted).
    GestureEnd {
        /// Device that produced the gesture.
        origin: InputOrigin,
    },

    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f64,
    },
}

impl SlideEvent {
    /// Mouse-down at `x`.
    #[must_use]
    pub const fn pointer_down(x: f64) -> Self {
        Self::GestureStart {
            x,
            origin: InputOrigin::Pointer,
        }
    }

    /// Mouse-move at `x`.
    #[must_use]
    pub const fn pointer_move(x: f64) -> Self {
        Self::GestureMove {
            x,
            origin: InputOrigin::Pointer,
        }
    }

    /// Mouse-up.
    #[must_use]
    pub const fn pointer_up() -> Self {
        Self::GestureEnd {
            origin: InputOrigin::Pointer,
        }
    }

    /// Touch-start at `x`.
    #[must_use]
    pub const fn touch_start(x: f64) -> Self {
        Self::GestureStart {
            x,
            origin: InputOrigin::Touch,
        }
    }

    /// Touch-move at `x`.
    #[must_use]
    pub const fn touch_move(x: f64) -> Self {
        Self::GestureMove {
            x,
            origin: InputOrigin::Touch,
        }
    }

    /// Touch-end.
    #[must_use]
    pub const fn touch_end() -> Self {
        Self::GestureEnd {
            origin: InputOrigin::Touch,
        }
    }

    /// Gesture phase, or `None` for non-gesture events.
    #[must_use]
    pub const fn phase(&self) -> Option<GesturePhase> {
        match self {
            Self::GestureStart { .. } => Some(GesturePhase::Start),
            Self::GestureMove { .. } => Some(GesturePhase::Move),
            Self::GestureEnd { .. } => Some(GesturePhase::End),
            Self::Resize { .. } => None,
        }
    }

    /// Device origin, or `None` for non-gesture events.
    #[must_use]
    pub const fn origin(&self) -> Option<InputOrigin> {
        match self {
            Self::GestureStart { origin, .. }
            | Self::GestureMove { origin, .. }
            | Self::GestureEnd { origin } => Some(*origin),
            Self::Resize { .. } => None,
        }
    }

    /// Horizontal coordinate carried by start/move events.
    #[must_use]
    pub const fn x(&self) -> Option<f64> {
        match self {
            Self::GestureStart { x, .. } | Self::GestureMove { x, .. } => Some(*x),
            Self::GestureEnd { .. } | Self::Resize { .. } => None,
        }
    }
}
