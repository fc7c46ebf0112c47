#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are host pixels. Inputs come straight from layout measurement
//! and are not validated: a zero-width viewport or a NaN offset propagates
//! into the result unchanged.

/// Translation that centers a panel inside the viewport.
///
/// Returns `-(panel_offset - (viewport_width - panel_width) / 2)`.
///
/// ```
/// use slide_core::geometry::compute_position;
///
/// // 300px viewport, 100px panel at offset 100: already centered.
/// assert_eq!(compute_position(300.0, 100.0, 100.0), 0.0);
/// // Same viewport, first panel: shift the track right by 100px.
/// assert_eq!(compute_position(300.0, 0.0, 100.0), 100.0);
/// ```
#[inline]
#[must_use]
pub fn compute_position(viewport_width: f64, panel_offset: f64, panel_width: f64) -> f64 {
    let margin = (viewport_width - panel_width) / 2.0;
    -(panel_offset - margin)
}

/// Measured horizontal geometry of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelGeometry {
    /// Left edge of the panel relative to the track origin.
    pub offset: f64,
    /// Panel width.
    pub width: f64,
}

impl PanelGeometry {
    /// Create a new panel measurement.
    #[inline]
    #[must_use]
    pub const fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.offset + self.width
    }

    /// Translation that centers this panel in a viewport of `viewport_width`.
    #[inline]
    #[must_use]
    pub fn centered_position(&self, viewport_width: f64) -> f64 {
        compute_position(viewport_width, self.offset, self.width)
    }
}

/// Lay out `count` panels of equal `width` back to back from offset 0.
///
/// Convenience for hosts (and tests) whose panels are uniform.
#[must_use]
pub fn uniform_strip(count: usize, width: f64) -> Vec<PanelGeometry> {
    (0..count)
        .map(|i| PanelGeometry::new(i as f64 * width, width))
        .collect()
}
