#![forbid(unsafe_code)]

//! `{prev, active, next}` index model over an ordered panel sequence.
//!
//! # Invariants
//!
//! 1. `active < len` for the length the state was last computed against.
//! 2. `prev.is_some()` iff `active > 0`, and then `prev == active - 1`.
//! 3. `next.is_some()` iff `active < len - 1`, and then `next == active + 1`.
//!
//! # Failure Modes
//!
//! | Call | Condition | Result |
//! |------|-----------|--------|
//! | `set_active` | `index >= len` | `Err(OutOfRange)`, state unchanged |
//! | `go_prev` | at first panel | no-op, `None` |
//! | `go_next` | at last panel | no-op, `None` |

use serde::{Deserialize, Serialize};

/// Navigation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Requested panel index is outside `[0, len - 1]`.
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "panel index {index} out of range (len={len})")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Active panel and its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexState {
    pub prev: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl IndexState {
    /// Compute the state for `index` in a sequence of `len` panels.
    pub fn for_index(index: usize, len: usize) -> Result<Self, NavigationError> {
        if index >= len {
            return Err(NavigationError::OutOfRange { index, len });
        }
        let last = len - 1;
        Ok(Self {
            prev: index.checked_sub(1),
            active: index,
            next: (index < last).then_some(index + 1),
        })
    }

    /// Whether the active panel is the first one.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.prev.is_none()
    }

    /// Whether the active panel is the last one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Maintains the [`IndexState`] for a sequence whose length may change
/// between layout passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexNavigator {
    state: Option<IndexState>,
    len: usize,
}

impl IndexNavigator {
    /// Create a navigator with no active panel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: None,
            len: 0,
        }
    }

    /// Make `index` the active panel of a `len`-panel sequence.
    pub fn set_active(&mut self, index: usize, len: usize) -> Result<IndexState, NavigationError> {
        let state = IndexState::for_index(index, len)?;
        self.state = Some(state);
        self.len = len;
        Ok(state)
    }

    /// Step to the previous panel. Returns the new active index, or `None`
    /// at the first panel (boundary clamp).
    pub fn go_prev(&mut self) -> Option<usize> {
        let prev = self.state?.prev?;
        self.set_active(prev, self.len).ok().map(|s| s.active)
    }

    /// Step to the next panel. Returns the new active index, or `None` at
    /// the last panel (boundary clamp).
    pub fn go_next(&mut self) -> Option<usize> {
        let next = self.state?.next?;
        self.set_active(next, self.len).ok().map(|s| s.active)
    }

    /// Current state, `None` before the first successful `set_active`.
    #[must_use]
    pub const fn state(&self) -> Option<IndexState> {
        self.state
    }

    /// Active panel index.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.state.map(|s| s.active)
    }

    /// Sequence length the state was computed against.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no panel is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    /// Forget the active panel.
    pub fn clear(&mut self) {
        self.state = None;
        self.len = 0;
    }
}
