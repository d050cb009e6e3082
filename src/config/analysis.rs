//! Analysis defaults configuration

use serde::Deserialize;

use crate::domain::analysis::{
    Thresholds, DEFAULT_MINIMAL_THRESHOLD, DEFAULT_STRONG_THRESHOLD, DEFAULT_WEAK_THRESHOLD,
};

use super::error::ValidationError;

/// Thresholds applied when a request does not supply its own.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Normalized score at or above which a requirement is strong
    #[serde(default = "default_strong_threshold")]
    pub strong_threshold: f64,

    /// Normalized score at or above which a requirement is weak
    #[serde(default = "default_weak_threshold")]
    pub weak_threshold: f64,

    /// Normalized coverage below which a criterion is minimal
    #[serde(default = "default_minimal_threshold")]
    pub minimal_threshold: f64,
}

impl AnalysisConfig {
    /// Default thresholds as a domain value
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(
            self.strong_threshold,
            self.weak_threshold,
            self.minimal_threshold,
        )
    }

    /// Validate analysis defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds().validate()?;
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strong_threshold: default_strong_threshold(),
            weak_threshold: default_weak_threshold(),
            minimal_threshold: default_minimal_threshold(),
        }
    }
}

fn default_strong_threshold() -> f64 {
    DEFAULT_STRONG_THRESHOLD
}

fn default_weak_threshold() -> f64 {
    DEFAULT_WEAK_THRESHOLD
}

fn default_minimal_threshold() -> f64 {
    DEFAULT_MINIMAL_THRESHOLD
}
