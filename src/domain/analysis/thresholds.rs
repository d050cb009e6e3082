//! Classification thresholds for requirement tiers and criterion coverage.

use serde::{Deserialize, Serialize};

use super::ThresholdError;

/// Normalized score at or above which a requirement is strong.
pub const DEFAULT_STRONG_THRESHOLD: f64 = 0.75;

/// Normalized score at or above which a non-strong requirement is weak
/// rather than risky.
pub const DEFAULT_WEAK_THRESHOLD: f64 = 0.30;

/// Normalized coverage below which a criterion is flagged as minimal.
pub const DEFAULT_MINIMAL_THRESHOLD: f64 = 0.30;

/// The three classification boundaries used by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub strong: f64,
    pub weak: f64,
    pub minimal: f64,
}

impl Thresholds {
    /// Creates a threshold triple.
    pub fn new(strong: f64, weak: f64, minimal: f64) -> Self {
        Self {
            strong,
            weak,
            minimal,
        }
    }

    /// Checks that every boundary is finite and that weak ≤ strong.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for (name, value) in [
            ("strong", self.strong),
            ("weak", self.weak),
            ("minimal", self.minimal),
        ] {
            if !value.is_finite() {
                return Err(ThresholdError::NotFinite { name, value });
            }
        }
        if self.weak > self.strong {
            return Err(ThresholdError::Inverted {
                strong: self.strong,
                weak: self.weak,
            });
        }
        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strong: DEFAULT_STRONG_THRESHOLD,
            weak: DEFAULT_WEAK_THRESHOLD,
            minimal: DEFAULT_MINIMAL_THRESHOLD,
        }
    }
}

/// Caller-supplied threshold values; any that are absent fall back to a
/// default triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal: Option<f64>,
}

impl ThresholdOverrides {
    /// Returns overrides that leave every default in place.
    pub fn none() -> Self {
        Self::default()
    }

    /// Fills the missing values from `defaults`.
    pub fn resolve(&self, defaults: Thresholds) -> Thresholds {
        Thresholds {
            strong: self.strong.unwrap_or(defaults.strong),
            weak: self.weak.unwrap_or(defaults.weak),
            minimal: self.minimal.unwrap_or(defaults.minimal),
        }
    }

    /// Layers `other` on top of `self`; values present in `other` win.
    pub fn merge(self, other: ThresholdOverrides) -> Self {
        Self {
            strong: other.strong.or(self.strong),
            weak: other.weak.or(self.weak),
            minimal: other.minimal.or(self.minimal),
        }
    }
}
