//! Analysis command handlers.
//!
//! Resolve caller thresholds against configured defaults, run the scoring
//! engine and log the outcome. The engine itself stays silent.

mod build_report;
mod errors;
mod run_analysis;

pub use build_report::BuildReportHandler;
pub use errors::AnalysisError;
pub use run_analysis::{RunAnalysisCommand, RunAnalysisHandler};
