#![forbid(unsafe_code)]

//! Carousel engine: the drag/settle state machine.
//!
//! [`SlideEngine`] receives normalized [`SlideEvent`]s, moves the track
//! through its [`SlideSurface`], and decides which panel becomes active when
//! a gesture ends.
//!
//! # State Machine
//!
//! ```text
//! Idle --GestureStart--> Dragging --GestureMove--> Dragging
//!   ^                       |
//!   +------GestureEnd-------+   (prev / next / snap-back)
//! ```
//!
//! - **GestureStart**: records the origin coordinate. Touch starts disable the
//!   transition at once so the track follows the finger; pointer starts leave
//!   it untouched.
//! - **GestureMove**: applies `movement + final_position` synchronously.
//! - **GestureEnd**: commits the drag, then picks the first matching rule:
//!   `movement > threshold` with a previous panel, `movement < -threshold`
//!   with a next panel, otherwise the current panel. The transition is
//!   re-enabled before the settling translation is applied.
//!
//! # Invariants
//!
//! 1. Every visible settle goes through [`navigate`](SlideEngine::navigate),
//!    so the surface translation and the index model never diverge.
//! 2. Each successful `navigate` emits exactly one [`SlideChange`].
//! 3. A relayout re-centers on the same logical panel (clamped to the new
//!    last panel if the sequence shrank).
//! 4. After [`dispose`](SlideEngine::dispose) gesture and resize events are
//!    ignored and no relayout is pending.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | Out-of-range navigate | caller passed `index >= len` | `Err(OutOfRange)` |
//! | Swipe past first/last panel | boundary | snap-back, no error |
//! | Missed end event | host lost the release | gesture restarts on next start |
//! | Degenerate geometry | surface reported NaN/zero widths | propagated, not repaired |
//!
//! Change listeners run while the engine is mutably borrowed; they must not
//! call back into a shared engine handle.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use slide_core::debounce::Debouncer;
use slide_core::drag::{DragState, DragTracker};
use slide_core::event::{InputOrigin, SlideEvent};
use slide_layout::{IndexNavigator, IndexState, NavigationError, PanelSequence};

use crate::config::SlideConfig;
use crate::notify::{ChangeListeners, ListenerId, SlideChange};
use crate::surface::SlideSurface;

/// Shared, single-threaded handle to an engine.
pub type SharedSlide<S> = Rc<RefCell<SlideEngine<S>>>;

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Idle,
    Dragging { origin: InputOrigin },
}

/// Which rule decided the end of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged right past the threshold; moved to the previous panel.
    Prev,
    /// Dragged left past the threshold; moved to the next panel.
    Next,
    /// Below threshold or at a boundary; re-settled on the same panel.
    SnapBack,
}

impl SwipeOutcome {
    /// Stable lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
            Self::SnapBack => "snap_back",
        }
    }
}

/// Why an event had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideIgnoredReason {
    /// The engine is not mounted (never mounted, or disposed).
    NotMounted,
    /// A move or end arrived without a gesture in progress.
    IdleWithoutGesture,
    /// The panel sequence is empty.
    NoPanels,
}

/// Observable result of one [`SlideEngine::handle_event`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideEffect {
    GestureStarted {
        origin: InputOrigin,
        start_x: f64,
        /// A previous gesture was still open (its end event was missed).
        restarted: bool,
    },
    Moved {
        translation: f64,
        movement: f64,
    },
    Settled {
        outcome: SwipeOutcome,
        active: usize,
        movement: f64,
    },
    RelayoutScheduled {
        deadline: Duration,
    },
    Ignored {
        reason: SlideIgnoredReason,
    },
}

/// Carousel engine over a rendering surface.
pub struct SlideEngine<S: SlideSurface> {
    surface: S,
    config: SlideConfig,
    state: SlideState,
    drag: DragTracker,
    index: IndexNavigator,
    panels: PanelSequence,
    relayout: Debouncer,
    listeners: ChangeListeners,
    mounted: bool,
}

impl<S: SlideSurface> std::fmt::Debug for SlideEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideEngine")
            .field("state", &self.state)
            .field("index", &self.index.state())
            .field("panels", &self.panels.len())
            .field("translation", &self.drag.state().move_position)
            .field("mounted", &self.mounted)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: SlideSurface> SlideEngine<S> {
    /// Create an unmounted engine.
    #[must_use]
    pub fn new(surface: S, config: SlideConfig) -> Self {
        Self {
            drag: DragTracker::new(config.drag_multiplier),
            relayout: Debouncer::new(config.relayout_debounce()),
            surface,
            config,
            state: SlideState::Idle,
            index: IndexNavigator::new(),
            panels: PanelSequence::default(),
            listeners: ChangeListeners::default(),
            mounted: false,
        }
    }

    /// Wrap the engine in a shared handle for controls and hosts.
    #[must_use]
    pub fn into_shared(self) -> SharedSlide<S> {
        Rc::new(RefCell::new(self))
    }

    /// Enable the transition, lay out the panels and activate the first one.
    pub fn mount(&mut self) -> Result<(), NavigationError> {
        self.surface.set_transition(Some(self.config.transition()));
        self.measure();
        self.navigate(0)?;
        self.mounted = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slide.mount", panels = self.panels.len());
        Ok(())
    }

    /// Tear the engine down: cancel pending relayout, drop every listener
    /// and stop routing events.
    pub fn dispose(&mut self) {
        self.relayout.cancel();
        self.listeners.clear();
        if let Some(resting) = self.drag.commit() {
            self.drag.settle(resting);
        }
        self.state = SlideState::Idle;
        self.mounted = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slide.dispose");
    }

    /// Route one input event. `now` is the host's monotonic time.
    pub fn handle_event(&mut self, event: &SlideEvent, now: Duration) -> SlideEffect {
        if !self.mounted {
            return SlideEffect::Ignored {
                reason: SlideIgnoredReason::NotMounted,
            };
        }
        match *event {
            SlideEvent::GestureStart { x, origin } => self.start_gesture(x, origin),
            SlideEvent::GestureMove { x, .. } => self.move_gesture(x),
            SlideEvent::GestureEnd { .. } => self.end_gesture(),
            SlideEvent::Resize { .. } => SlideEffect::RelayoutScheduled {
                deadline: self.notify_resize(now),
            },
        }
    }

    /// Make `index` the active panel.
    ///
    /// Applies the panel's centering translation, updates the committed drag
    /// position and the index model, marks the panel on the surface and
    /// notifies listeners.
    pub fn navigate(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.panels.len();
        let position = self
            .panels
            .position(index)
            .ok_or(NavigationError::OutOfRange { index, len })?;
        let previous = self.index.active();
        self.index.set_active(index, len)?;

        self.drag.settle(position);
        self.surface.apply_translation(position);
        self.surface.mark_active(index);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slide.navigate",
            index,
            previous = ?previous,
            position
        );

        self.listeners.emit(&SlideChange {
            active: index,
            previous,
        });
        Ok(())
    }

    /// Move to the previous panel. Returns `false` at the first panel.
    pub fn previous(&mut self) -> bool {
        match self.index.state().and_then(|s| s.prev) {
            Some(prev) => self.navigate(prev).is_ok(),
            None => false,
        }
    }

    /// Move to the next panel. Returns `false` at the last panel.
    pub fn next(&mut self) -> bool {
        match self.index.state().and_then(|s| s.next) {
            Some(next) => self.navigate(next).is_ok(),
            None => false,
        }
    }

    /// Re-measure the panels now and re-center on the active panel.
    ///
    /// If the sequence shrank below the active index, the last panel becomes
    /// active. Fails only when no panels remain.
    pub fn relayout(&mut self) -> Result<(), NavigationError> {
        self.measure();
        let active = self.index.active().unwrap_or(0);
        let Some(last) = self.panels.last_index() else {
            self.index.clear();
            return Err(NavigationError::OutOfRange {
                index: active,
                len: 0,
            });
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slide.relayout",
            active,
            panels = self.panels.len(),
            viewport_width = self.panels.viewport_width()
        );
        self.navigate(active.min(last))
    }

    /// Register a viewport resize at `now`; returns the relayout deadline.
    pub fn notify_resize(&mut self, now: Duration) -> Duration {
        self.relayout.schedule(now);
        self.relayout.deadline().unwrap_or(now)
    }

    /// Run the debounced relayout if its quiet window has elapsed.
    ///
    /// Returns `Ok(true)` if a relayout ran.
    pub fn tick(&mut self, now: Duration) -> Result<bool, NavigationError> {
        if !self.mounted || !self.relayout.poll(now) {
            return Ok(false);
        }
        self.relayout()?;
        Ok(true)
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SlideChange) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Remove a change listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered change listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SlideState {
        self.state
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SlideState::Dragging { .. })
    }

    /// Whether the engine is mounted and routing events.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current `{prev, active, next}` triple.
    #[must_use]
    pub const fn index(&self) -> Option<IndexState> {
        self.index.state()
    }

    /// Active panel index.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.index.active()
    }

    /// Translation currently applied to the track.
    #[must_use]
    pub const fn translation(&self) -> f64 {
        self.drag.state().move_position
    }

    /// Snapshot of the drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Panel sequence from the last layout pass.
    #[must_use]
    pub const fn panels(&self) -> &PanelSequence {
        &self.panels
    }

    /// Whether a debounced relayout is pending.
    #[must_use]
    pub const fn relayout_pending(&self) -> bool {
        self.relayout.is_pending()
    }

    /// Rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable rendering surface (hosts update geometry through this).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Replace the configuration. Applies to the next gesture and the next
    /// resize burst.
    pub fn set_config(&mut self, config: SlideConfig) {
        self.drag.set_multiplier(config.drag_multiplier);
        self.relayout.set_window(config.relayout_debounce());
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal transitions
// ---------------------------------------------------------------------------

impl<S: SlideSurface> SlideEngine<S> {
    fn measure(&mut self) {
        let width = self.surface.viewport_width();
        let geometry = self.surface.panel_geometry();
        self.panels = PanelSequence::measure(width, &geometry);
    }

    fn start_gesture(&mut self, x: f64, origin: InputOrigin) -> SlideEffect {
        let restarted = self.is_dragging();
        if restarted {
            // Missed end: keep the track where the open gesture left it.
            self.drag.commit();
        }
        self.drag.begin(x);
        if origin == InputOrigin::Touch {
            self.surface.set_transition(None);
        }
        self.state = SlideState::Dragging { origin };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "slide.gesture_start",
            x,
            origin = origin.as_str(),
            restarted
        );
        SlideEffect::GestureStarted {
            origin,
            start_x: x,
            restarted,
        }
    }

    fn move_gesture(&mut self, x: f64) -> SlideEffect {
        if !self.is_dragging() {
            return SlideEffect::Ignored {
                reason: SlideIgnoredReason::IdleWithoutGesture,
            };
        }
        let translation = self.drag.update(x);
        self.surface.apply_translation(translation);
        SlideEffect::Moved {
            translation,
            movement: self.drag.movement(),
        }
    }

    fn end_gesture(&mut self) -> SlideEffect {
        if !self.is_dragging() {
            return SlideEffect::Ignored {
                reason: SlideIgnoredReason::IdleWithoutGesture,
            };
        }
        self.drag.commit();
        self.state = SlideState::Idle;

        let Some(index) = self.index.state() else {
            let resting = self.drag.state().final_position;
            self.drag.settle(resting);
            return SlideEffect::Ignored {
                reason: SlideIgnoredReason::NoPanels,
            };
        };
        let movement = self.drag.movement();
        let threshold = self.config.swipe_threshold;
        let (outcome, target) = if movement > threshold
            && let Some(prev) = index.prev
        {
            (SwipeOutcome::Prev, prev)
        } else if movement < -threshold
            && let Some(next) = index.next
        {
            (SwipeOutcome::Next, next)
        } else {
            (SwipeOutcome::SnapBack, index.active)
        };

        self.surface.set_transition(Some(self.config.transition()));
        if self.navigate(target).is_err() {
            return SlideEffect::Ignored {
                reason: SlideIgnoredReason::NoPanels,
            };
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slide.settle",
            outcome = outcome.as_str(),
            active = target,
            movement
        );

        SlideEffect::Settled {
            outcome,
            active: target,
            movement,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
