//! Classification - Requirement tiers and minimal-coverage criteria.

use serde::{Deserialize, Serialize};

use super::Thresholds;

/// Satisfaction tier of a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementTier {
    Strong,
    Weak,
    Risky,
}

impl RequirementTier {
    /// Tier for a normalized requirement score.
    ///
    /// Evaluated top-down so each score lands in exactly one tier, even when
    /// the strong and weak thresholds coincide. NaN scores are risky.
    pub fn classify(normalized_score: f64, thresholds: &Thresholds) -> Self {
        if normalized_score >= thresholds.strong {
            RequirementTier::Strong
        } else if normalized_score >= thresholds.weak {
            RequirementTier::Weak
        } else {
            RequirementTier::Risky
        }
    }
}

/// Requirement indices split into the three tiers, each in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementTiers {
    pub strong: Vec<usize>,
    pub weak: Vec<usize>,
    pub risky: Vec<usize>,
}

impl RequirementTiers {
    /// Total number of classified requirements.
    pub fn len(&self) -> usize {
        self.strong.len() + self.weak.len() + self.risky.len()
    }

    /// Returns true when no requirement was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions requirement indices by normalized score in a single pass.
pub fn classify_requirements(normalized_scores: &[f64], thresholds: &Thresholds) -> RequirementTiers {
    let mut tiers = RequirementTiers::default();

    for (index, &score) in normalized_scores.iter().enumerate() {
        match RequirementTier::classify(score, thresholds) {
            RequirementTier::Strong => tiers.strong.push(index),
            RequirementTier::Weak => tiers.weak.push(index),
            RequirementTier::Risky => tiers.risky.push(index),
        }
    }

    tiers
}

/// Indices of criteria whose normalized coverage is below `minimal`.
pub fn find_minimal_criteria(normalized_coverage: &[f64], minimal: f64) -> Vec<usize> {
    normalized_coverage
        .iter()
        .enumerate()
        .filter(|(_, &coverage)| coverage < minimal)
        .map(|(index, _)| index)
        .collect()
}

/// Membership mask of length `len` with `true` at every listed index.
///
/// Indices at or beyond `len` are ignored.
pub fn index_mask(indices: &[usize], len: usize) -> Vec<bool> {
    let mut mask = vec![false; len];
    for &index in indices {
        if let Some(slot) = mask.get_mut(index) {
            *slot = true;
        }
    }
    mask
}
