//! Scoring Engine - Weighted aggregation, normalization, classification and
//! design-option derivation.

use serde::{Deserialize, Serialize};

use super::{
    classify_requirements, derive_design_options, find_minimal_criteria, AnalysisInput,
    DesignOption, ShapeError,
};

/// Everything derived from one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// RS: weighted matching strength per requirement.
    pub requirement_score: Vec<f64>,
    /// CC: weighted matching strength per criterion.
    pub criterion_coverage: Vec<f64>,
    pub requirement_score_norm: Vec<f64>,
    pub criterion_coverage_norm: Vec<f64>,
    /// Indices whose normalized score is at or above the strong threshold.
    pub strong_requirements: Vec<usize>,
    /// Indices whose normalized score is at or above the weak threshold but
    /// below the strong one.
    pub weak_requirements: Vec<usize>,
    /// Indices whose normalized score is below the weak threshold.
    pub risky_requirements: Vec<usize>,
    /// Criterion indices whose normalized coverage is below the minimal
    /// threshold.
    pub minimal_criteria: Vec<usize>,
    pub design_options: Vec<DesignOption>,
}

/// Divides every entry by the vector's maximum.
///
/// When the maximum is not positive (or the vector is empty) there is no
/// signal to scale against and every entry becomes 0. Entries below zero,
/// which only arise from negative weights, are floored at 0 so the result
/// always lies in [0, 1].
pub fn normalize_by_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max.is_nan() || max <= 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v / max).max(0.0)).collect()
}

/// Stateless BRCMA scoring engine.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Runs the full analysis.
    ///
    /// # Algorithm
    /// 1. Validate every shape; any mismatch aborts before arithmetic
    /// 2. Clamp matching strengths into [0, 1]
    /// 3. RS = S · criterion_weights, CC = Sᵀ · requirement_weights
    /// 4. Normalize RS and CC by their maxima
    /// 5. Partition requirements into strong/weak/risky, flag minimal criteria
    /// 6. Derive the four design options
    ///
    /// # Edge Cases
    /// - No requirements or no criteria: empty vectors and sets, no error
    /// - All-zero matrix: every requirement risky, every criterion minimal
    pub fn analyze(input: &AnalysisInput) -> Result<AnalysisResult, ShapeError> {
        let matrix = input.validated_matrix()?.clamped();
        let thresholds = &input.thresholds;

        let requirement_score = matrix.weighted_row_sums(&input.criterion_weights);
        let criterion_coverage = matrix.weighted_column_sums(&input.requirement_weights);

        let requirement_score_norm = normalize_by_max(&requirement_score);
        let criterion_coverage_norm = normalize_by_max(&criterion_coverage);

        let tiers = classify_requirements(&requirement_score_norm, thresholds);
        let minimal_criteria = find_minimal_criteria(&criterion_coverage_norm, thresholds.minimal);

        let design_options =
            derive_design_options(&tiers, &minimal_criteria, matrix.column_count());

        Ok(AnalysisResult {
            requirement_score,
            criterion_coverage,
            requirement_score_norm,
            criterion_coverage_norm,
            strong_requirements: tiers.strong,
            weak_requirements: tiers.weak,
            risky_requirements: tiers.risky,
            minimal_criteria,
            design_options,
        })
    }
}
