//! Axum router configuration for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    build_report, download_template, run_analysis, run_analysis_csv, AnalysisAppState,
};

/// Create the analysis API router.
///
/// # Routes
/// - `POST /run` - Run an analysis from a JSON body
/// - `POST /report` - Run an analysis and return the labelled report
/// - `POST /run/csv` - Run an analysis from a matrix CSV body
/// - `GET /template` - Download the matrix CSV template
pub fn analysis_routes() -> Router<AnalysisAppState> {
    Router::new()
        .route("/run", post(run_analysis))
        .route("/report", post(build_report))
        .route("/run/csv", post(run_analysis_csv))
        .route("/template", get(download_template))
}

/// Create the complete analysis module router, mounted at `/brcma`.
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new().nest("/brcma", analysis_routes())
}
