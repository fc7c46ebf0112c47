#![forbid(unsafe_code)]

//! Layout: the measured panel sequence and the `{prev, active, next}` index
//! model built over it.
//!
//! # Role in slide
//! A layout pass turns the surface's measured geometry into a
//! [`PanelSequence`], where every [`Panel`] carries the translation that
//! centers it. [`IndexNavigator`] tracks which panel is active and which
//! neighbours exist. Both are plain data: the engine in `slide-widgets`
//! decides when to rebuild or move them.

pub mod index;
pub mod panel;

pub use index::{IndexNavigator, IndexState, NavigationError};
pub use panel::{Panel, PanelSequence};
pub use slide_core::geometry::PanelGeometry;
