//! HTTP DTOs for analysis endpoints.
//!
//! The domain result types are already designed for serialization, so
//! responses reuse them directly. Requests get their own DTO so the wire
//! format can accept the legacy field names as well as the canonical ones.

pub use crate::domain::analysis::{AnalysisReport, AnalysisResult};

use serde::{Deserialize, Serialize};

use crate::application::RunAnalysisCommand;
use crate::domain::analysis::ThresholdOverrides;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /brcma/run` and `POST /brcma/report`.
///
/// Accepts `R`, `C`, `WRC`, `WEC` and `S` as aliases, plus top-level
/// `thr_sr`/`thr_wr`/`thr_mr` threshold overrides. When both spellings of a
/// threshold are present the nested `thresholds` value wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunAnalysisRequest {
    /// Requirement labels
    #[serde(alias = "R")]
    pub requirements: Vec<String>,
    /// Criterion labels
    #[serde(alias = "C")]
    pub criteria: Vec<String>,
    /// One weight per requirement
    #[serde(alias = "WRC")]
    pub requirement_weights: Vec<f64>,
    /// One weight per criterion
    #[serde(alias = "WEC")]
    pub criterion_weights: Vec<f64>,
    /// Matching strengths, one row per requirement
    #[serde(alias = "S")]
    pub match_matrix: Vec<Vec<f64>>,
    /// Optional threshold overrides
    #[serde(default)]
    pub thresholds: ThresholdOverrides,

    #[serde(rename = "thr_sr", default, skip_serializing_if = "Option::is_none")]
    pub legacy_strong_threshold: Option<f64>,
    #[serde(rename = "thr_wr", default, skip_serializing_if = "Option::is_none")]
    pub legacy_weak_threshold: Option<f64>,
    #[serde(rename = "thr_mr", default, skip_serializing_if = "Option::is_none")]
    pub legacy_minimal_threshold: Option<f64>,
}

impl RunAnalysisRequest {
    /// Converts the request into an application command.
    pub fn into_command(self) -> RunAnalysisCommand {
        let legacy = ThresholdOverrides {
            strong: self.legacy_strong_threshold,
            weak: self.legacy_weak_threshold,
            minimal: self.legacy_minimal_threshold,
        };

        RunAnalysisCommand {
            requirements: self.requirements,
            criteria: self.criteria,
            requirement_weights: self.requirement_weights,
            criterion_weights: self.criterion_weights,
            match_matrix: self.match_matrix,
            thresholds: legacy.merge(self.thresholds),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_request_deserializes() {
        let json = r#"{
            "requirements": ["r1"],
            "criteria": ["c1", "c2"],
            "requirementWeights": [1.0],
            "criterionWeights": [1.0, 2.0],
            "matchMatrix": [[0.5, 0.25]],
            "thresholds": {"strong": 0.8}
        }"#;
        let req: RunAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.criterion_weights, vec![1.0, 2.0]);
        assert_eq!(req.thresholds.strong, Some(0.8));
        assert!(req.legacy_strong_threshold.is_none());
    }

    #[test]
    fn legacy_request_deserializes() {
        let json = r#"{
            "R": ["r1"],
            "C": ["c1"],
            "WRC": [2.0],
            "WEC": [3.0],
            "S": [[0.4]],
            "thr_sr": 0.9,
            "thr_mr": 0.1
        }"#;
        let req: RunAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.requirements, vec!["r1"]);
        assert_eq!(req.requirement_weights, vec![2.0]);
        assert_eq!(req.match_matrix, vec![vec![0.4]]);

        let cmd = req.into_command();
        assert_eq!(cmd.thresholds.strong, Some(0.9));
        assert_eq!(cmd.thresholds.weak, None);
        assert_eq!(cmd.thresholds.minimal, Some(0.1));
    }

    #[test]
    fn nested_thresholds_win_over_legacy() {
        let json = r#"{
            "requirements": [], "criteria": [],
            "requirementWeights": [], "criterionWeights": [], "matchMatrix": [],
            "thresholds": {"weak": 0.2},
            "thr_wr": 0.4
        }"#;
        let req: RunAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.into_command().thresholds.weak, Some(0.2));
    }

    #[test]
    fn missing_matrix_is_rejected() {
        let json = r#"{
            "requirements": [], "criteria": [],
            "requirementWeights": [], "criterionWeights": []
        }"#;
        assert!(serde_json::from_str::<RunAnalysisRequest>(json).is_err());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_string(&ErrorResponse::new("SHAPE_MISMATCH", "bad")).unwrap();
        assert!(!json.contains("details"));
    }
}
