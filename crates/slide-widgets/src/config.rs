#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! Every tunable of the engine lives in [`SlideConfig`]. Defaults reproduce
//! the hand-tuned feel of the widget: a 120px swipe threshold, 1.5x drag
//! amplification, a 200ms resize quiet window and a 500ms settle transition.
//!
//! # Loading
//!
//! With the `config` feature the struct can be loaded from TOML or JSON.
//! Missing keys fall back to the defaults.
//!
//! ```toml
//! # slide.toml
//! swipe_threshold = 80.0
//! relayout_debounce_ms = 250
//! ```
//!
//! ```rust,ignore
//! let config = SlideConfig::from_toml_file("slide.toml")?;
//! let config = SlideConfig::from_json_str(json)?;
//! ```

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Default minimum scaled drag distance that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 120.0;
/// Default quiet window before a resize triggers relayout.
pub const DEFAULT_RELAYOUT_DEBOUNCE_MS: u64 = 200;
/// Default settle transition duration.
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// Tunable parameters of a [`SlideEngine`](crate::slide::SlideEngine).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SlideConfig {
    /// Scaled movement (px) a drag must exceed to change panel.
    pub swipe_threshold: f64,
    /// Amplification applied to raw pointer travel.
    pub drag_multiplier: f64,
    /// Resize quiet window in milliseconds.
    pub relayout_debounce_ms: u64,
    /// Settle transition duration in milliseconds.
    pub transition_ms: u64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            drag_multiplier: slide_core::drag::DEFAULT_DRAG_MULTIPLIER,
            relayout_debounce_ms: DEFAULT_RELAYOUT_DEBOUNCE_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl SlideConfig {
    /// Set the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold = px;
        self
    }

    /// Set the drag multiplier.
    #[must_use]
    pub fn with_drag_multiplier(mut self, multiplier: f64) -> Self {
        self.drag_multiplier = multiplier;
        self
    }

    /// Set the resize quiet window.
    ///
    /// Stored in whole milliseconds; a fractional millisecond rounds up.
    #[must_use]
    pub fn with_relayout_debounce(mut self, window: Duration) -> Self {
        self.relayout_debounce_ms = duration_to_ms(window);
        self
    }

    /// Set the settle transition duration.
    ///
    /// Stored in whole milliseconds; a fractional millisecond rounds up.
    #[must_use]
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition_ms = duration_to_ms(duration);
        self
    }

    /// Resize quiet window.
    #[must_use]
    pub const fn relayout_debounce(&self) -> Duration {
        Duration::from_millis(self.relayout_debounce_ms)
    }

    /// Settle transition duration.
    #[must_use]
    pub const fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            errors.push(format!(
                "swipe_threshold must be finite and >= 0, got {}",
                self.swipe_threshold
            ));
        }
        if !self.drag_multiplier.is_finite() || self.drag_multiplier <= 0.0 {
            errors.push(format!(
                "drag_multiplier must be finite and > 0, got {}",
                self.drag_multiplier
            ));
        }
        if self.transition_ms == 0 {
            errors.push("transition_ms must be > 0".to_string());
        }
        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, SlideConfigError> {
        let config: Self = toml::from_str(s).map_err(SlideConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SlideConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SlideConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, SlideConfigError> {
        let config: Self = serde_json::from_str(s).map_err(SlideConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SlideConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SlideConfigError::Io)?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, SlideConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(SlideConfigError::Validation(errors))
        }
    }
}

fn duration_to_ms(d: Duration) -> u64 {
    let partial = u128::from(d.subsec_nanos() % 1_000_000 != 0);
    u64::try_from(d.as_millis() + partial).unwrap_or(u64::MAX)
}

/// Errors from loading a [`SlideConfig`].
#[derive(Debug)]
pub enum SlideConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for SlideConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errs) => {
                write!(f, "validation errors: ")?;
                for (i, e) in errs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SlideConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_feel() {
        let c = SlideConfig::default();
        assert_eq!(c.swipe_threshold, 120.0);
        assert_eq!(c.drag_multiplier, 1.5);
        assert_eq!(c.relayout_debounce(), Duration::from_millis(200));
        assert_eq!(c.transition(), Duration::from_millis(500));
        assert!(c.validate().is_empty());
    }

    #[test]
    fn sub_millisecond_durations_round_up() {
        let c = SlideConfig::default()
            .with_transition(Duration::from_micros(500))
            .with_relayout_debounce(Duration::from_micros(1_500));
        assert_eq!(c.transition_ms, 1);
        assert_eq!(c.relayout_debounce_ms, 2);
        assert!(c.validate().is_empty());

        let exact = SlideConfig::default().with_transition(Duration::from_millis(7));
        assert_eq!(exact.transition_ms, 7);
        let zero = SlideConfig::default().with_transition(Duration::ZERO);
        assert_eq!(zero.transition_ms, 0);
        assert_eq!(
            duration_to_ms(Duration::new(u64::MAX, 999_999_999)),
            u64::MAX
        );
    }

    #[test]
    fn builders() {
        let c = SlideConfig::default()
            .with_swipe_threshold(60.0)
            .with_drag_multiplier(1.0)
            .with_relayout_debounce(Duration::from_secs(1))
            .with_transition(Duration::from_millis(250));
        assert_eq!(c.swipe_threshold, 60.0);
        assert_eq!(c.drag_multiplier, 1.0);
        assert_eq!(c.relayout_debounce_ms, 1_000);
        assert_eq!(c.transition_ms, 250);
    }

    #[test]
    fn validate_reports_every_problem() {
        let c = SlideConfig {
            swipe_threshold: -1.0,
            drag_multiplier: f64::NAN,
            relayout_debounce_ms: 0,
            transition_ms: 0,
        };
        let errors = c.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
    }

    #[test]
    fn validation_error_display_joins() {
        let err = SlideConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_partial_uses_defaults() {
        let c = SlideConfig::from_toml_str("swipe_threshold = 80.0\n").unwrap();
        assert_eq!(c.swipe_threshold, 80.0);
        assert_eq!(c.drag_multiplier, 1.5);
        assert_eq!(c.relayout_debounce_ms, 200);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_roundtrip() {
        let c = SlideConfig::default().with_transition(Duration::from_millis(300));
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(SlideConfig::from_json_str(&json).unwrap(), c);
    }

    #[cfg(feature = "config")]
    #[test]
    fn invalid_values_are_rejected() {
        let err = SlideConfig::from_json_str(r#"{"drag_multiplier": 0.0}"#).unwrap_err();
        assert!(matches!(err, SlideConfigError::Validation(ref e) if e.len() == 1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_file_loading() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "relayout_debounce_ms = 1000").unwrap();
        let c = SlideConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(c.relayout_debounce(), Duration::from_secs(1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = SlideConfig::from_json_file("/nonexistent/slide.json").unwrap_err();
        assert!(matches!(err, SlideConfigError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_toml_is_parse_error() {
        let err = SlideConfig::from_toml_str("swipe_threshold = \"wide\"").unwrap_err();
        assert!(matches!(err, SlideConfigError::Toml(_)));
    }
}
