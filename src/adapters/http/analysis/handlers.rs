//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the analysis command handlers.

use axum::extract::{Json, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;

use crate::adapters::csv::{parse_matrix_csv, CsvImportError, MATRIX_CSV_TEMPLATE};
use crate::application::{AnalysisError, BuildReportHandler, RunAnalysisHandler};
use crate::domain::analysis::{ThresholdOverrides, Thresholds};

use super::dto::{AnalysisReport, AnalysisResult, ErrorResponse, RunAnalysisRequest};

/// File name offered for the CSV template download.
pub const TEMPLATE_FILE_NAME: &str = "brcma_template.csv";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalysisApiError {
    Analysis(AnalysisError),
    Csv(CsvImportError),
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let error = match self {
            AnalysisApiError::Analysis(AnalysisError::Shape(e)) => {
                ErrorResponse::new("SHAPE_MISMATCH", e.to_string())
                    .with_details(json!({ "field": e.field() }))
            }
            AnalysisApiError::Analysis(e) => ErrorResponse::new(e.code(), e.to_string()),
            AnalysisApiError::Csv(e) => ErrorResponse::new("INVALID_CSV", e.to_string()),
        };
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

impl From<AnalysisError> for AnalysisApiError {
    fn from(error: AnalysisError) -> Self {
        AnalysisApiError::Analysis(error)
    }
}

impl From<CsvImportError> for AnalysisApiError {
    fn from(error: CsvImportError) -> Self {
        AnalysisApiError::Csv(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for analysis endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisAppState {
    /// Thresholds applied when a request leaves them unset.
    pub defaults: Thresholds,
}

impl AnalysisAppState {
    pub fn new(defaults: Thresholds) -> Self {
        Self { defaults }
    }

    pub fn run_analysis_handler(&self) -> RunAnalysisHandler {
        RunAnalysisHandler::new(self.defaults)
    }

    pub fn build_report_handler(&self) -> BuildReportHandler {
        BuildReportHandler::new(self.defaults)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /brcma/run
///
/// Runs an analysis and returns the raw index-based result.
pub async fn run_analysis(
    State(state): State<AnalysisAppState>,
    Json(request): Json<RunAnalysisRequest>,
) -> Result<Json<AnalysisResult>, AnalysisApiError> {
    let result = state
        .run_analysis_handler()
        .handle(request.into_command())?;
    Ok(Json(result))
}

/// POST /brcma/report
///
/// Runs an analysis and returns the result together with a labelled summary.
pub async fn build_report(
    State(state): State<AnalysisAppState>,
    Json(request): Json<RunAnalysisRequest>,
) -> Result<Json<AnalysisReport>, AnalysisApiError> {
    let report = state
        .build_report_handler()
        .handle(request.into_command())?;
    Ok(Json(report))
}

/// POST /brcma/run/csv
///
/// Accepts a matrix CSV as the raw request body. Thresholds may be given as
/// `strong`, `weak` and `minimal` query parameters.
pub async fn run_analysis_csv(
    State(state): State<AnalysisAppState>,
    Query(overrides): Query<ThresholdOverrides>,
    body: String,
) -> Result<Json<AnalysisResult>, AnalysisApiError> {
    let mut command = parse_matrix_csv(&body)?;
    command.thresholds = overrides;

    let result = state.run_analysis_handler().handle(command)?;
    Ok(Json(result))
}

/// GET /brcma/template
///
/// Returns the example matrix CSV as a file download.
pub async fn download_template() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", TEMPLATE_FILE_NAME),
            ),
        ],
        MATRIX_CSV_TEMPLATE,
    )
}
