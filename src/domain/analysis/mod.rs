//! Analysis Module - Pure domain services for requirements-to-criteria
//! matching analysis.
//!
//! # Components
//!
//! - `MatchMatrix` - Dense row-major matching strengths with weighted products
//! - `Thresholds` - Strong/weak/minimal classification boundaries
//! - `ScoringEngine` - RS/CC aggregation, normalization, classification
//! - `DesignOption` - Heuristic requirement/criterion bundles
//! - `AnalysisReport` - Labelled view with headline metrics
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take value
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod classification;
mod design_options;
mod errors;
mod input;
mod match_matrix;
mod report;
mod scoring_engine;
mod thresholds;

// Re-export all public types
pub use classification::{
    classify_requirements, find_minimal_criteria, index_mask, RequirementTier, RequirementTiers,
};
pub use design_options::{derive_design_options, DesignOption, DesignOptionKind};
pub use errors::{ShapeError, ThresholdError};
pub use input::AnalysisInput;
pub use match_matrix::{clamp_strength, MatchMatrix};
pub use report::{
    AnalysisReport, AnalysisSummary, CriterionStatus, LabelledDesignOption, RankedLabel,
    RequirementStatus,
};
pub use scoring_engine::{normalize_by_max, AnalysisResult, ScoringEngine};
pub use thresholds::{
    ThresholdOverrides, Thresholds, DEFAULT_MINIMAL_THRESHOLD, DEFAULT_STRONG_THRESHOLD,
    DEFAULT_WEAK_THRESHOLD,
};
