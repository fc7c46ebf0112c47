#![forbid(unsafe_code)]

//! slide public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use slide::prelude::*;
//! use slide::core::geometry::uniform_strip;
//!
//! let surface = MemorySurface::new(300.0, uniform_strip(3, 100.0));
//! let (mut host, _listen) = slide::mount(surface, SlideConfig::default())?;
//! host.dispatch(&HostInput::MouseDown { client_x: 200.0 });
//! host.dispatch(&HostInput::MouseMove { client_x: 100.0 });
//! host.dispatch(&HostInput::MouseUp);
//! assert_eq!(host.engine().borrow().active(), Some(1));
//! # Ok::<(), slide::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use slide_core::debounce::Debouncer;
pub use slide_core::drag::{DEFAULT_DRAG_MULTIPLIER, DragState, DragTracker};
pub use slide_core::event::{GesturePhase, InputOrigin, SlideEvent};
pub use slide_core::geometry::{PanelGeometry, compute_position};

// --- Layout re-exports -----------------------------------------------------

pub use slide_layout::{IndexNavigator, IndexState, NavigationError, Panel, PanelSequence};

// --- Widget re-exports -----------------------------------------------------

pub use slide_widgets::{
    ListenerId, MemorySurface, NavControls, SharedSlide, SlideChange, SlideConfig,
    SlideConfigError, SlideEffect, SlideEngine, SlideIgnoredReason, SlideState, SlideSurface,
    SwipeOutcome,
};

// --- Web re-exports --------------------------------------------------------

pub use slide_web::{
    Clock, DeterministicClock, HostCommand, HostDispatch, HostIgnoredReason, HostInput,
    HostListenerId, HostOutcome, ListenerKind, SlideHost, WallClock,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for slide hosts.
#[derive(Debug)]
pub enum Error {
    /// Navigation to a panel that does not exist.
    Navigation(NavigationError),
    /// Configuration failed to load or validate.
    Config(SlideConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Navigation(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        Self::Navigation(err)
    }
}

impl From<SlideConfigError> for Error {
    fn from(err: SlideConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for slide APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Mount helper ---------------------------------------------------------

/// Validate `config`, build an engine over `surface` and mount it behind a
/// deterministic-clock host.
///
/// Returns the host and the listener commands the embedding must install.
pub fn mount<S: SlideSurface>(
    surface: S,
    config: SlideConfig,
) -> Result<(SlideHost<S>, Vec<HostCommand>)> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(SlideConfigError::Validation(errors).into());
    }
    let mut host = SlideHost::new(SlideEngine::new(surface, config));
    let commands = host.mount()?;
    Ok((host, commands))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, HostCommand, HostInput, InputOrigin, MemorySurface, NavControls, PanelGeometry,
        Result, SlideChange, SlideConfig, SlideEngine, SlideEvent, SlideHost, SlideSurface,
    };

    pub use crate::{core, layout, web, widgets};
}

pub use slide_core as core;
pub use slide_layout as layout;
pub use slide_web as web;
pub use slide_widgets as widgets;
