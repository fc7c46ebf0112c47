#![forbid(unsafe_code)]

//! Core: input events, panel geometry, drag tracking and resize debouncing.
//!
//! # Role in slide
//! `slide-core` is the input layer of the carousel engine. It owns the
//! normalized gesture events that hosts deliver, the pure centering math,
//! the per-gesture drag tracker, and the quiet-window debouncer used for
//! resize-driven relayout.
//!
//! # How it fits in the system
//! `slide-layout` builds the panel sequence and index model on top of
//! [`geometry`]. `slide-widgets` drives [`drag::DragTracker`] and
//! [`debounce::Debouncer`] from its state machine. Nothing in this crate
//! touches a rendering surface.

pub mod debounce;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
