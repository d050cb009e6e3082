//! Analysis Report - Labelled view of an analysis result.
//!
//! The engine speaks in indices; the report maps them back to requirement
//! and criterion labels and adds the headline metrics shown alongside the
//! raw result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{index_mask, AnalysisInput, AnalysisResult, RequirementTier, Thresholds};

/// A label together with the normalized value that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLabel {
    pub index: usize,
    pub label: String,
    pub value: f64,
}

/// Per-requirement status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementStatus {
    pub label: String,
    pub normalized_score: f64,
    pub tier: RequirementTier,
}

/// Per-criterion status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionStatus {
    pub label: String,
    pub normalized_coverage: f64,
    pub minimal: bool,
}

/// A design option with indices resolved to labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelledDesignOption {
    pub name: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub criteria: Vec<String>,
}

/// Headline metrics and labelled sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub requirement_count: usize,
    pub criterion_count: usize,
    pub thresholds: Thresholds,
    pub strong_requirements: Vec<String>,
    pub weak_requirements: Vec<String>,
    pub risky_requirements: Vec<String>,
    pub minimal_criteria: Vec<String>,
    pub average_requirement_score_norm: f64,
    pub average_criterion_coverage_norm: f64,
    pub top_requirement: Option<RankedLabel>,
    pub best_covered_criterion: Option<RankedLabel>,
    pub requirement_statuses: Vec<RequirementStatus>,
    pub criterion_statuses: Vec<CriterionStatus>,
    pub design_options: Vec<LabelledDesignOption>,
}

/// Result plus labelled summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub summary: AnalysisSummary,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Builds the report for a result computed from `input`.
    pub fn build(input: &AnalysisInput, result: AnalysisResult, generated_at: DateTime<Utc>) -> Self {
        let requirement_label = |i: usize| label_or_fallback(&input.requirements, i, 'R');
        let criterion_label = |j: usize| label_or_fallback(&input.criteria, j, 'C');

        let tiers = tiers_by_index(&result);
        let requirement_statuses = result
            .requirement_score_norm
            .iter()
            .zip(&tiers)
            .enumerate()
            .map(|(i, (&score, &tier))| RequirementStatus {
                label: requirement_label(i),
                normalized_score: score,
                tier,
            })
            .collect();

        let minimal_mask = index_mask(
            &result.minimal_criteria,
            result.criterion_coverage_norm.len(),
        );
        let criterion_statuses = result
            .criterion_coverage_norm
            .iter()
            .zip(&minimal_mask)
            .enumerate()
            .map(|(j, (&coverage, &minimal))| CriterionStatus {
                label: criterion_label(j),
                normalized_coverage: coverage,
                minimal,
            })
            .collect();

        let design_options = result
            .design_options
            .iter()
            .map(|option| LabelledDesignOption {
                name: option.name.clone(),
                description: option.description.clone(),
                requirements: option.requirements.iter().map(|&i| requirement_label(i)).collect(),
                criteria: option.criteria.iter().map(|&j| criterion_label(j)).collect(),
            })
            .collect();

        let summary = AnalysisSummary {
            requirement_count: input.requirement_count(),
            criterion_count: input.criterion_count(),
            thresholds: input.thresholds,
            strong_requirements: result.strong_requirements.iter().map(|&i| requirement_label(i)).collect(),
            weak_requirements: result.weak_requirements.iter().map(|&i| requirement_label(i)).collect(),
            risky_requirements: result.risky_requirements.iter().map(|&i| requirement_label(i)).collect(),
            minimal_criteria: result.minimal_criteria.iter().map(|&j| criterion_label(j)).collect(),
            average_requirement_score_norm: average(&result.requirement_score_norm),
            average_criterion_coverage_norm: average(&result.criterion_coverage_norm),
            top_requirement: first_maximum(&result.requirement_score_norm)
                .map(|(index, value)| RankedLabel {
                    index,
                    label: requirement_label(index),
                    value,
                }),
            best_covered_criterion: first_maximum(&result.criterion_coverage_norm)
                .map(|(index, value)| RankedLabel {
                    index,
                    label: criterion_label(index),
                    value,
                }),
            requirement_statuses,
            criterion_statuses,
            design_options,
        };

        Self {
            result,
            summary,
            generated_at,
        }
    }
}

fn label_or_fallback(labels: &[String], index: usize, prefix: char) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("{}{}", prefix, index + 1))
}

/// Tier of every requirement, indexed by requirement. Indices missing from
/// the strong and weak sets are risky.
fn tiers_by_index(result: &AnalysisResult) -> Vec<RequirementTier> {
    let mut tiers = vec![RequirementTier::Risky; result.requirement_score_norm.len()];
    for (indices, tier) in [
        (&result.strong_requirements, RequirementTier::Strong),
        (&result.weak_requirements, RequirementTier::Weak),
    ] {
        for &i in indices {
            if let Some(slot) = tiers.get_mut(i) {
                *slot = tier;
            }
        }
    }
    tiers
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Index and value of the largest entry; ties keep the earliest index.
fn first_maximum(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, best_value)) if v <= best_value => best,
            _ => Some((i, v)),
        })
}
