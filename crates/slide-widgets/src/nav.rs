#![forbid(unsafe_code)]

//! Navigation controls: one indicator per panel plus previous/next actions.
//!
//! [`NavControls`] composes over a [`SharedSlide`] handle. It subscribes to
//! the engine's change notifications so the highlighted control always
//! follows the active panel, whether the change came from a control, a
//! swipe or a relayout.
//!
//! # Invariants
//!
//! 1. `highlighted()` equals the engine's active index after every
//!    notification.
//! 2. Dropping the controls removes exactly the subscription they created.
//!
//! # Failure Modes
//!
//! - Dropping the controls while the engine is borrowed cannot unsubscribe.
//!   The listener stays registered but inert, and a
//!   `slide.nav.subscription_leaked` debug event is emitted.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slide_layout::NavigationError;

use crate::notify::{ListenerId, SlideChange};
use crate::slide::SharedSlide;
use crate::surface::SlideSurface;

type HighlightHook = Box<dyn FnMut(Option<usize>, usize)>;

#[derive(Default)]
struct ControlState {
    highlighted: Option<usize>,
    hook: Option<HighlightHook>,
    /// Set when the controls were dropped without unsubscribing.
    detached: bool,
}

/// Record the new highlight, then run the hook with the state released so
/// the hook may read the controls or install a replacement hook.
fn apply(state: &RefCell<ControlState>, change: &SlideChange) {
    let (old, hook) = {
        let mut state = state.borrow_mut();
        if state.detached || state.highlighted == Some(change.active) {
            return;
        }
        (state.highlighted.replace(change.active), state.hook.take())
    };
    let Some(mut hook) = hook else {
        return;
    };
    hook(old, change.active);
    let mut state = state.borrow_mut();
    if state.hook.is_none() && !state.detached {
        state.hook = Some(hook);
    }
}

/// Indicator and previous/next controls bound to one engine.
pub struct NavControls<S: SlideSurface + 'static> {
    engine: SharedSlide<S>,
    state: Rc<RefCell<ControlState>>,
    subscription: ListenerId,
}

impl<S: SlideSurface + 'static> fmt::Debug for NavControls<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavControls")
            .field("highlighted", &self.highlighted())
            .field("subscription", &self.subscription)
            .finish()
    }
}

impl<S: SlideSurface + 'static> NavControls<S> {
    /// Bind controls to `engine`, highlighting its current active panel.
    pub fn attach(engine: SharedSlide<S>) -> Self {
        let state = Rc::new(RefCell::new(ControlState {
            highlighted: engine.borrow().active(),
            hook: None,
            detached: false,
        }));
        let sink = Rc::clone(&state);
        let subscription = engine
            .borrow_mut()
            .subscribe(move |change| apply(&sink, change));
        Self {
            engine,
            state,
            subscription,
        }
    }

    /// Activate the previous panel. Returns `false` at the first panel.
    pub fn previous(&self) -> bool {
        self.engine.borrow_mut().previous()
    }

    /// Activate the next panel. Returns `false` at the last panel.
    pub fn next(&self) -> bool {
        self.engine.borrow_mut().next()
    }

    /// Activate the panel behind `control`.
    pub fn go_to(&self, control: usize) -> Result<(), NavigationError> {
        self.engine.borrow_mut().navigate(control)
    }

    /// Index of the highlighted control.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.state.borrow().highlighted
    }

    /// Number of controls (one per panel).
    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.borrow().panels().len()
    }

    /// Whether there are no controls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Install a hook called as `hook(old, new)` whenever the highlight moves.
    ///
    /// Replaces any previous hook. The hook must not call back into the
    /// engine.
    pub fn on_highlight<F>(&self, hook: F)
    where
        F: FnMut(Option<usize>, usize) + 'static,
    {
        self.state.borrow_mut().hook = Some(Box::new(hook));
    }

    /// Shared engine handle.
    #[must_use]
    pub fn engine(&self) -> &SharedSlide<S> {
        &self.engine
    }
}

impl<S: SlideSurface + 'static> Drop for NavControls<S> {
    fn drop(&mut self) {
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.unsubscribe(self.subscription);
            return;
        }
        // Engine is borrowed, so the listener stays registered. Disarm it.
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.detached = true;
            state.hook = None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slide.nav.subscription_leaked",
            listener = self.subscription.get()
        );
    }
}
