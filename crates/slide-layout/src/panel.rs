#![forbid(unsafe_code)]

//! Measured panel sequence.
//!
//! A [`PanelSequence`] is the result of one layout pass: it is rebuilt from
//! scratch whenever the viewport or the panel set changes and is immutable in
//! between. Each [`Panel`] stores the translation that centers it, so
//! navigation never recomputes geometry.

use serde::{Deserialize, Serialize};
use slide_core::geometry::{PanelGeometry, compute_position};

/// One panel of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Position of the panel in the sequence (maps to the host element).
    pub index: usize,
    /// Translation that centers this panel in the viewport.
    pub position: f64,
    /// Measured left edge at layout time.
    pub offset: f64,
    /// Measured width at layout time.
    pub width: f64,
}

impl Panel {
    /// Geometry this panel was measured with.
    #[must_use]
    pub const fn geometry(&self) -> PanelGeometry {
        PanelGeometry::new(self.offset, self.width)
    }
}

/// Ordered panels from one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelSequence {
    viewport_width: f64,
    panels: Vec<Panel>,
}

impl PanelSequence {
    /// Measure `geometry` against a viewport of `viewport_width`.
    #[must_use]
    pub fn measure(viewport_width: f64, geometry: &[PanelGeometry]) -> Self {
        let panels = geometry
            .iter()
            .enumerate()
            .map(|(index, g)| Panel {
                index,
                position: compute_position(viewport_width, g.offset, g.width),
                offset: g.offset,
                width: g.width,
            })
            .collect();
        Self {
            viewport_width,
            panels,
        }
    }

    /// Panel at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// Centering translation of the panel at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<f64> {
        self.panels.get(index).map(|p| p.position)
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the sequence has no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Index of the last panel.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.panels.len().checked_sub(1)
    }

    /// Viewport width used for this pass.
    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Iterate over panels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    /// Panels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Panel] {
        &self.panels
    }
}

impl<'a> IntoIterator for &'a PanelSequence {
    type Item = &'a Panel;
    type IntoIter = std::slice::Iter<'a, Panel>;

    fn into_iter(self) -> Self::IntoIter {
        self.panels.iter()
    }
}
