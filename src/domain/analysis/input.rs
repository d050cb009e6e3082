//! Analysis Input - The validated-shape payload handed to the scoring engine.

use serde::{Deserialize, Serialize};

use super::{MatchMatrix, ShapeError, Thresholds};

/// Requirements, criteria, their weights and the matching strengths between
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    /// Ordered requirement labels (n).
    pub requirements: Vec<String>,
    /// Ordered criterion labels (m).
    pub criteria: Vec<String>,
    /// One weight per requirement.
    pub requirement_weights: Vec<f64>,
    /// One weight per criterion.
    pub criterion_weights: Vec<f64>,
    /// n×m matching strengths, one row per requirement.
    pub match_matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl AnalysisInput {
    /// Creates an input with default thresholds.
    pub fn new(
        requirements: Vec<impl Into<String>>,
        criteria: Vec<impl Into<String>>,
        requirement_weights: Vec<f64>,
        criterion_weights: Vec<f64>,
        match_matrix: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            requirements: requirements.into_iter().map(Into::into).collect(),
            criteria: criteria.into_iter().map(Into::into).collect(),
            requirement_weights,
            criterion_weights,
            match_matrix,
            thresholds: Thresholds::default(),
        }
    }

    /// Replaces the thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Number of requirements (n).
    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }

    /// Number of criteria (m).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Checks every dimensional invariant and returns the matrix in dense
    /// form, unclamped.
    ///
    /// Checks run in a fixed order: matrix rows, matrix columns,
    /// requirement weights, criterion weights. The first violation wins.
    pub fn validated_matrix(&self) -> Result<MatchMatrix, ShapeError> {
        let n = self.requirement_count();
        let m = self.criterion_count();

        let matrix = MatchMatrix::from_rows(&self.match_matrix, n, m)?;

        if self.requirement_weights.len() != n {
            return Err(ShapeError::RequirementWeights {
                expected: n,
                actual: self.requirement_weights.len(),
            });
        }
        if self.criterion_weights.len() != m {
            return Err(ShapeError::CriterionWeights {
                expected: m,
                actual: self.criterion_weights.len(),
            });
        }

        Ok(matrix)
    }
}
