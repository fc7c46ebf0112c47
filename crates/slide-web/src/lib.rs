#![forbid(unsafe_code)]

//! `slide-web` adapts the carousel engine to browser-shaped hosts.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes DOM-like inputs
//!   and carries out the returned listener commands.
//! - **Deterministic time**: with [`DeterministicClock`] the host advances
//!   monotonic time explicitly; [`WallClock`] reads real time via `web-time`.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate does not bind to `wasm-bindgen`. It provides the adapter a JS
//! shim can wrap.

pub mod clock;
pub mod host;
pub mod listeners;

pub use clock::{Clock, DeterministicClock, WallClock};
pub use host::{HostCommand, HostDispatch, HostIgnoredReason, HostInput, HostOutcome, SlideHost};
pub use listeners::{HostListenerId, ListenerKind, ListenerRegistry, ListenerTarget};
pub use slide_widgets::MemorySurface;
