//! BuildReportHandler - Runs an analysis and returns the labelled report.

use chrono::Utc;

use crate::domain::analysis::{AnalysisReport, Thresholds};

use super::run_analysis::run_engine;
use super::{AnalysisError, RunAnalysisCommand};

/// Handler producing [`AnalysisReport`]s.
#[derive(Debug, Clone, Copy)]
pub struct BuildReportHandler {
    defaults: Thresholds,
}

impl BuildReportHandler {
    pub fn new(defaults: Thresholds) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        let input = cmd.into_input(self.defaults)?;
        let result = run_engine(&input)?;
        Ok(AnalysisReport::build(&input, result, Utc::now()))
    }
}
