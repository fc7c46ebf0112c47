#![forbid(unsafe_code)]

//! DOM-shaped host adapter for a [`SlideEngine`].
//!
//! [`SlideHost`] sits between a browser-like event loop and the engine. The
//! host pushes raw [`HostInput`]s; the adapter normalizes them to
//! [`SlideEvent`]s, timestamps them with its [`Clock`], and returns the
//! [`HostCommand`]s the host must carry out (install or remove a listener,
//! cancel the default action).
//!
//! # Listener lifecycle
//!
//! - `mount` installs start/end listeners for both input kinds plus the
//!   window resize listener.
//! - A start installs a move listener of the matching kind. It lives for one
//!   gesture and is removed on the next end (or replaced by a new start).
//! - Mouse starts request `PreventDefault` so the browser does not begin a
//!   native drag.
//! - `dispose` removes every listener still installed.
//!
//! Move inputs that arrive without a matching move listener are dropped, the
//! same way the DOM would never deliver them. An end of the other input kind
//! (a `mouseup` while a touch drag is open) is dropped too, so the open
//! gesture keeps its move listener.

use slide_core::event::SlideEvent;
use slide_layout::NavigationError;
use slide_widgets::{SharedSlide, SlideEffect, SlideEngine, SlideSurface};

use crate::clock::{Clock, DeterministicClock};
use crate::listeners::{HostListenerId, ListenerKind, ListenerRegistry};

/// Raw input delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    MouseDown { client_x: f64 },
    MouseMove { client_x: f64 },
    MouseUp,
    /// `changed_touches` holds the `clientX` of every changed touch point.
    TouchStart { changed_touches: Vec<f64> },
    TouchMove { changed_touches: Vec<f64> },
    TouchEnd,
    /// Window resize with the new viewport width.
    Resize { width: f64 },
}

impl HostInput {
    /// Listener that delivers this input.
    #[must_use]
    pub const fn listener_kind(&self) -> ListenerKind {
        match self {
            Self::MouseDown { .. } => ListenerKind::MouseDown,
            Self::MouseMove { .. } => ListenerKind::MouseMove,
            Self::MouseUp => ListenerKind::MouseUp,
            Self::TouchStart { .. } => ListenerKind::TouchStart,
            Self::TouchMove { .. } => ListenerKind::TouchMove,
            Self::TouchEnd => ListenerKind::TouchEnd,
            Self::Resize { .. } => ListenerKind::Resize,
        }
    }
}

/// Command the host must carry out after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Install a listener and remember it under `id`.
    Listen { id: HostListenerId, kind: ListenerKind },
    /// Remove the listener installed under `id`.
    Unlisten { id: HostListenerId, kind: ListenerKind },
    /// Call `preventDefault()` on the event being dispatched.
    PreventDefault,
}

/// Deterministic reason why an input was dropped by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostIgnoredReason {
    /// The host is not mounted.
    NotMounted,
    /// A touch input carried no changed touch point.
    NoTouchPoint,
    /// A move arrived while no move listener of its kind was installed.
    NoMoveListener,
    /// An end arrived whose kind differs from the open gesture's move
    /// listener, e.g. `mouseup` during a touch drag.
    EndKindMismatch,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOutcome {
    /// Forwarded to the engine.
    Forwarded,
    Ignored(HostIgnoredReason),
}

/// Result of one [`SlideHost::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct HostDispatch {
    /// Engine effect, if the input reached the engine.
    pub effect: Option<SlideEffect>,
    /// Commands for the host, in order.
    pub commands: Vec<HostCommand>,
    pub outcome: HostOutcome,
}

impl HostDispatch {
    fn ignored(reason: HostIgnoredReason) -> Self {
        Self {
            effect: None,
            commands: Vec::new(),
            outcome: HostOutcome::Ignored(reason),
        }
    }
}

/// Host adapter owning the engine handle, a clock and the listener set.
#[derive(Debug)]
pub struct SlideHost<S: SlideSurface, C: Clock = DeterministicClock> {
    engine: SharedSlide<S>,
    clock: C,
    listeners: ListenerRegistry,
    move_listener: Option<(HostListenerId, ListenerKind)>,
    mounted: bool,
}

impl<S: SlideSurface> SlideHost<S, DeterministicClock> {
    /// Wrap `engine` with a deterministic clock starting at zero.
    #[must_use]
    pub fn new(engine: SlideEngine<S>) -> Self {
        Self::with_clock(engine.into_shared(), DeterministicClock::new())
    }
}

impl<S: SlideSurface, C: Clock> SlideHost<S, C> {
    /// Wrap a shared engine with the given clock.
    #[must_use]
    pub fn with_clock(engine: SharedSlide<S>, clock: C) -> Self {
        Self {
            engine,
            clock,
            listeners: ListenerRegistry::new(),
            move_listener: None,
            mounted: false,
        }
    }

    /// Mount the engine and install the long-lived listeners.
    ///
    /// Mounting twice installs nothing new.
    pub fn mount(&mut self) -> Result<Vec<HostCommand>, NavigationError> {
        if self.mounted {
            return Ok(Vec::new());
        }
        self.engine.borrow_mut().mount()?;
        self.mounted = true;
        Ok(ListenerKind::MOUNTED
            .iter()
            .map(|&kind| self.listen(kind))
            .collect())
    }

    /// Dispose the engine and remove every installed listener.
    pub fn dispose(&mut self) -> Vec<HostCommand> {
        self.engine.borrow_mut().dispose();
        self.mounted = false;
        self.move_listener = None;
        self.listeners
            .drain()
            .into_iter()
            .map(|(id, kind)| {
                trace_listener("slide.host.unlisten", id, kind);
                HostCommand::Unlisten { id, kind }
            })
            .collect()
    }

    /// Route one host input.
    pub fn dispatch(&mut self, input: &HostInput) -> HostDispatch {
        if !self.mounted {
            return self.finish(input, HostDispatch::ignored(HostIgnoredReason::NotMounted));
        }
        let result = match input {
            HostInput::MouseDown { client_x } => {
                let mut commands = vec![HostCommand::PreventDefault];
                commands.extend(self.replace_move_listener(ListenerKind::MouseMove));
                self.forward(SlideEvent::pointer_down(*client_x), commands)
            }
            HostInput::TouchStart { changed_touches } => match changed_touches.first() {
                Some(&x) => {
                    let commands = self.replace_move_listener(ListenerKind::TouchMove);
                    self.forward(SlideEvent::touch_start(x), commands)
                }
                None => HostDispatch::ignored(HostIgnoredReason::NoTouchPoint),
            },
            HostInput::MouseMove { client_x } => {
                if self.move_kind() == Some(ListenerKind::MouseMove) {
                    self.forward(SlideEvent::pointer_move(*client_x), Vec::new())
                } else {
                    HostDispatch::ignored(HostIgnoredReason::NoMoveListener)
                }
            }
            HostInput::TouchMove { changed_touches } => {
                if self.move_kind() != Some(ListenerKind::TouchMove) {
                    HostDispatch::ignored(HostIgnoredReason::NoMoveListener)
                } else if let Some(&x) = changed_touches.first() {
                    self.forward(SlideEvent::touch_move(x), Vec::new())
                } else {
                    HostDispatch::ignored(HostIgnoredReason::NoTouchPoint)
                }
            }
            HostInput::MouseUp => self.end(ListenerKind::MouseMove, SlideEvent::pointer_up()),
            HostInput::TouchEnd => self.end(ListenerKind::TouchMove, SlideEvent::touch_end()),
            HostInput::Resize { width } => {
                self.forward(SlideEvent::Resize { width: *width }, Vec::new())
            }
        };
        self.finish(input, result)
    }

    /// Run a due relayout. Call from the host's animation-frame or timer hook.
    pub fn tick(&mut self) -> Result<bool, NavigationError> {
        let now = self.clock.now_mono();
        self.engine.borrow_mut().tick(now)
    }

    /// Shared engine handle.
    #[must_use]
    pub fn engine(&self) -> &SharedSlide<S> {
        &self.engine
    }

    /// Clock used to timestamp inputs.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable clock (deterministic hosts advance time through this).
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Installed listeners.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Whether the host is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn move_kind(&self) -> Option<ListenerKind> {
        self.move_listener.map(|(_, kind)| kind)
    }

    fn listen(&mut self, kind: ListenerKind) -> HostCommand {
        let id = self.listeners.register(kind);
        trace_listener("slide.host.listen", id, kind);
        HostCommand::Listen { id, kind }
    }

    fn drop_move_listener(&mut self) -> Option<HostCommand> {
        let (id, kind) = self.move_listener.take()?;
        self.listeners.remove(id)?;
        trace_listener("slide.host.unlisten", id, kind);
        Some(HostCommand::Unlisten { id, kind })
    }

    fn end(&mut self, move_kind: ListenerKind, event: SlideEvent) -> HostDispatch {
        if self.move_kind().is_some_and(|open| open != move_kind) {
            return HostDispatch::ignored(HostIgnoredReason::EndKindMismatch);
        }
        let commands = self.drop_move_listener().into_iter().collect();
        self.forward(event, commands)
    }

    fn replace_move_listener(&mut self, kind: ListenerKind) -> Vec<HostCommand> {
        let mut commands: Vec<HostCommand> = self.drop_move_listener().into_iter().collect();
        let id = self.listeners.register(kind);
        trace_listener("slide.host.listen", id, kind);
        self.move_listener = Some((id, kind));
        commands.push(HostCommand::Listen { id, kind });
        commands
    }

    fn forward(&mut self, event: SlideEvent, commands: Vec<HostCommand>) -> HostDispatch {
        let now = self.clock.now_mono();
        let effect = self.engine.borrow_mut().handle_event(&event, now);
        HostDispatch {
            effect: Some(effect),
            commands,
            outcome: HostOutcome::Forwarded,
        }
    }

    #[allow(unused_variables)]
    fn finish(&self, input: &HostInput, dispatch: HostDispatch) -> HostDispatch {
        #[cfg(feature = "tracing")]
        match dispatch.outcome {
            HostOutcome::Forwarded => tracing::trace!(
                message = "slide.host.dispatch",
                event = input.listener_kind().event_name(),
                commands = dispatch.commands.len()
            ),
            HostOutcome::Ignored(reason) => tracing::debug!(
                message = "slide.host.ignored",
                event = input.listener_kind().event_name(),
                reason = ?reason
            ),
        }
        dispatch
    }
}

#[allow(unused_variables)]
fn trace_listener(message: &'static str, id: HostListenerId, kind: ListenerKind) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = message,
        id = id.get(),
        event = kind.event_name(),
        target = ?kind.target()
    );
}
