//! Error types for the analysis domain.

use thiserror::Error;

/// Dimensional mismatch between the matching matrix, the weight vectors
/// and the requirement/criterion label lists.
///
/// Every variant is fatal to the invocation that raised it; the engine never
/// produces a partial result alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("matchMatrix must have {expected} rows (one per requirement), got {actual}")]
    MatrixRows { expected: usize, actual: usize },

    #[error("matchMatrix row {row} must have {expected} columns (one per criterion), got {actual}")]
    MatrixColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("requirementWeights length must equal the number of requirements ({expected}), got {actual}")]
    RequirementWeights { expected: usize, actual: usize },

    #[error("criterionWeights length must equal the number of criteria ({expected}), got {actual}")]
    CriterionWeights { expected: usize, actual: usize },
}

impl ShapeError {
    /// Name of the input field whose shape was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            ShapeError::MatrixRows { .. } | ShapeError::MatrixColumns { .. } => "matchMatrix",
            ShapeError::RequirementWeights { .. } => "requirementWeights",
            ShapeError::CriterionWeights { .. } => "criterionWeights",
        }
    }
}

/// Threshold triple that cannot drive a consistent classification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold '{name}' must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("weak threshold ({weak}) must not exceed strong threshold ({strong})")]
    Inverted { strong: f64, weak: f64 },
}
