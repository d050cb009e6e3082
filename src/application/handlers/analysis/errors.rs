//! Errors surfaced by the analysis command handlers.

use thiserror::Error;

use crate::domain::analysis::{ShapeError, ThresholdError};

/// Reasons an analysis command is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),
}

impl AnalysisError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::Shape(_) => "SHAPE_MISMATCH",
            AnalysisError::InvalidThresholds(_) => "INVALID_THRESHOLDS",
        }
    }
}
