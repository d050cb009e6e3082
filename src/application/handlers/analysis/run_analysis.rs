//! RunAnalysisHandler - Command handler for a single BRCMA run.

use tracing::{debug, info, warn};

use crate::domain::analysis::{
    AnalysisInput, AnalysisResult, ScoringEngine, ThresholdOverrides, Thresholds,
};

use super::AnalysisError;

/// Command to run an analysis.
///
/// Thresholds left unset fall back to the handler's configured defaults.
#[derive(Debug, Clone, Default)]
pub struct RunAnalysisCommand {
    pub requirements: Vec<String>,
    pub criteria: Vec<String>,
    pub requirement_weights: Vec<f64>,
    pub criterion_weights: Vec<f64>,
    pub match_matrix: Vec<Vec<f64>>,
    pub thresholds: ThresholdOverrides,
}

impl RunAnalysisCommand {
    /// Resolves thresholds against `defaults` and produces the engine input.
    pub fn into_input(self, defaults: Thresholds) -> Result<AnalysisInput, AnalysisError> {
        let thresholds = self.thresholds.resolve(defaults);
        thresholds.validate()?;

        Ok(AnalysisInput {
            requirements: self.requirements,
            criteria: self.criteria,
            requirement_weights: self.requirement_weights,
            criterion_weights: self.criterion_weights,
            match_matrix: self.match_matrix,
            thresholds,
        })
    }
}

/// Runs the engine and records the outcome.
pub(super) fn run_engine(input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
    debug!(
        requirements = input.requirement_count(),
        criteria = input.criterion_count(),
        strong = input.thresholds.strong,
        weak = input.thresholds.weak,
        minimal = input.thresholds.minimal,
        "Running BRCMA analysis"
    );

    let result = ScoringEngine::analyze(input).map_err(|e| {
        warn!(field = e.field(), error = %e, "Rejected analysis input");
        AnalysisError::from(e)
    })?;

    info!(
        requirements = input.requirement_count(),
        criteria = input.criterion_count(),
        strong = result.strong_requirements.len(),
        weak = result.weak_requirements.len(),
        risky = result.risky_requirements.len(),
        minimal_criteria = result.minimal_criteria.len(),
        "BRCMA analysis completed"
    );

    Ok(result)
}

/// Handler for analysis runs.
#[derive(Debug, Clone, Copy)]
pub struct RunAnalysisHandler {
    defaults: Thresholds,
}

impl RunAnalysisHandler {
    pub fn new(defaults: Thresholds) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisResult, AnalysisError> {
        let input = cmd.into_input(self.defaults)?;
        run_engine(&input)
    }
}

impl Default for RunAnalysisHandler {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
