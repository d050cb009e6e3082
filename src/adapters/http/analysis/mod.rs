//! Analysis HTTP adapter module.
//!
//! Provides REST API endpoints for running BRCMA analyses.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, RunAnalysisRequest};
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::{analysis_router, analysis_routes};
