#![forbid(unsafe_code)]

//! Rendering surface contract.
//!
//! The engine never draws. It asks a [`SlideSurface`] for measurements and
//! tells it where the track should sit; everything visual (CSS transforms,
//! GPU quads, terminal cells) lives behind this trait. Every call is
//! synchronous and infallible.

use std::time::Duration;

use slide_core::geometry::PanelGeometry;

/// Host-side rendering surface for one carousel.
pub trait SlideSurface {
    /// Current width of the visible viewport.
    fn viewport_width(&self) -> f64;

    /// Measured geometry of every panel, in track order.
    fn panel_geometry(&self) -> Vec<PanelGeometry>;

    /// Translate the track horizontally by `x` pixels.
    fn apply_translation(&mut self, x: f64);

    /// Enable (`Some(duration)`) or disable (`None`) the track transition.
    fn set_transition(&mut self, transition: Option<Duration>);

    /// Mark the panel at `index` as the active one (e.g. toggle a class).
    fn mark_active(&mut self, index: usize) {
        let _ = index;
    }
}

impl<T: SlideSurface + ?Sized> SlideSurface for Box<T> {
    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }

    fn panel_geometry(&self) -> Vec<PanelGeometry> {
        (**self).panel_geometry()
    }

    fn apply_translation(&mut self, x: f64) {
        (**self).apply_translation(x);
    }

    fn set_transition(&mut self, transition: Option<Duration>) {
        (**self).set_transition(transition);
    }

    fn mark_active(&mut self, index: usize) {
        (**self).mark_active(index);
    }
}

/// In-memory surface for headless hosts and tests.
///
/// Geometry is set by the host; every command the engine issues is recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    viewport_width: f64,
    panels: Vec<PanelGeometry>,
    translation: f64,
    transition: Option<Duration>,
    active: Option<usize>,
    translations: Vec<f64>,
    transitions: Vec<Option<Duration>>,
}

impl MemorySurface {
    /// Create a surface with the given viewport width and panel geometry.
    #[must_use]
    pub fn new(viewport_width: f64, panels: Vec<PanelGeometry>) -> Self {
        Self {
            viewport_width,
            panels,
            ..Self::default()
        }
    }

    /// Change the viewport width (as a window resize would).
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Replace the panel geometry.
    pub fn set_panels(&mut self, panels: Vec<PanelGeometry>) {
        self.panels = panels;
    }

    /// Last applied translation.
    #[must_use]
    pub const fn translation(&self) -> f64 {
        self.translation
    }

    /// Current transition setting.
    #[must_use]
    pub const fn transition(&self) -> Option<Duration> {
        self.transition
    }

    /// Panel last marked active.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Every translation applied so far, oldest first.
    #[must_use]
    pub fn translations(&self) -> &[f64] {
        &self.translations
    }

    /// Every transition toggle so far, oldest first.
    #[must_use]
    pub fn transitions(&self) -> &[Option<Duration>] {
        &self.transitions
    }

    /// Forget recorded history (current values are kept).
    pub fn clear_history(&mut self) {
        self.translations.clear();
        self.transitions.clear();
    }
}

impl SlideSurface for MemorySurface {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn panel_geometry(&self) -> Vec<PanelGeometry> {
        self.panels.clone()
    }

    fn apply_translation(&mut self, x: f64) {
        self.translation = x;
        self.translations.push(x);
    }

    fn set_transition(&mut self, transition: Option<Duration>) {
        self.transition = transition;
        self.transitions.push(transition);
    }

    fn mark_active(&mut self, index: usize) {
        self.active = Some(index);
    }
}
