//! Design Options - Heuristic requirement/criterion bundles derived from the
//! classification.

use serde::{Deserialize, Serialize};

use super::{index_mask, RequirementTiers};

/// The four heuristic bundles, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignOptionKind {
    Optimal,
    Balanced,
    Minimalist,
    EnhancedQuality,
}

impl DesignOptionKind {
    /// All kinds in report order.
    pub const ALL: [DesignOptionKind; 4] = [
        DesignOptionKind::Optimal,
        DesignOptionKind::Balanced,
        DesignOptionKind::Minimalist,
        DesignOptionKind::EnhancedQuality,
    ];

    /// Returns the display name for this option.
    pub fn name(&self) -> &'static str {
        match self {
            DesignOptionKind::Optimal => "Optimal",
            DesignOptionKind::Balanced => "Balanced",
            DesignOptionKind::Minimalist => "Minimalist",
            DesignOptionKind::EnhancedQuality => "Enhanced Quality",
        }
    }

    /// Returns the one-line description for this option.
    pub fn description(&self) -> &'static str {
        match self {
            DesignOptionKind::Optimal => "SR + medium WR addressing key criteria",
            DesignOptionKind::Balanced => "Mix of SR and WR with trade-offs",
            DesignOptionKind::Minimalist => "Only SR to ensure simplicity",
            DesignOptionKind::EnhancedQuality => "Add new requirements to address MR",
        }
    }
}

/// A candidate configuration: a subset of requirement indices paired with a
/// subset of criterion indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignOption {
    pub name: String,
    pub description: String,
    /// Indices into the requirement list.
    pub requirements: Vec<usize>,
    /// Indices into the criterion list.
    pub criteria: Vec<usize>,
}

impl DesignOption {
    /// Creates an option of the given kind.
    pub fn new(kind: DesignOptionKind, requirements: Vec<usize>, criteria: Vec<usize>) -> Self {
        Self {
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            requirements,
            criteria,
        }
    }
}

/// Derives the four design options.
///
/// Requirement lists concatenate tiers in order (strong first) and are not
/// deduplicated. The Enhanced Quality option only surfaces the minimal
/// criteria; no new requirements are synthesized for them.
pub fn derive_design_options(
    tiers: &RequirementTiers,
    minimal_criteria: &[usize],
    criterion_count: usize,
) -> Vec<DesignOption> {
    let minimal_mask = index_mask(minimal_criteria, criterion_count);
    let all_criteria: Vec<usize> = (0..criterion_count).collect();
    let covered_criteria: Vec<usize> = all_criteria
        .iter()
        .copied()
        .filter(|&j| !minimal_mask[j])
        .collect();

    let half_weak = &tiers.weak[..tiers.weak.len() / 2];
    let strong_and_weak = [tiers.strong.as_slice(), tiers.weak.as_slice()].concat();

    DesignOptionKind::ALL
        .iter()
        .map(|&kind| match kind {
            DesignOptionKind::Optimal => DesignOption::new(
                kind,
                [tiers.strong.as_slice(), half_weak].concat(),
                covered_criteria.clone(),
            ),
            DesignOptionKind::Balanced => {
                DesignOption::new(kind, strong_and_weak.clone(), all_criteria.clone())
            }
            DesignOptionKind::Minimalist => {
                DesignOption::new(kind, tiers.strong.clone(), covered_criteria.clone())
            }
            DesignOptionKind::EnhancedQuality => {
                DesignOption::new(kind, strong_and_weak.clone(), minimal_criteria.to_vec())
            }
        })
        .collect()
}
