//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations: it applies configured defaults
//! to incoming commands, invokes the pure domain services and records what
//! happened.

pub mod handlers;

pub use handlers::{AnalysisError, BuildReportHandler, RunAnalysisCommand, RunAnalysisHandler};
