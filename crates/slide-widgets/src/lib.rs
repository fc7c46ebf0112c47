#![forbid(unsafe_code)]

//! Carousel engine and controls.
//!
//! # Role in slide
//! `slide-widgets` owns the behaviour: [`SlideEngine`] turns gesture events
//! into track translations and panel changes, [`NavControls`] keeps a set of
//! indicators in step with it, and [`SlideConfig`] holds every tunable.
//!
//! # How it fits in the system
//! Inputs come from `slide-core` events, layout from `slide-layout`, and
//! output goes to whatever implements [`SlideSurface`]. `slide-web` wraps an
//! engine for DOM-shaped hosts.

pub mod config;
pub mod nav;
pub mod notify;
pub mod slide;
pub mod surface;

pub use config::{SlideConfig, SlideConfigError};
pub use nav::NavControls;
pub use notify::{ListenerId, SlideChange};
pub use slide::{
    SharedSlide, SlideEffect, SlideEngine, SlideIgnoredReason, SlideState, SwipeOutcome,
};
pub use surface::{MemorySurface, SlideSurface};
