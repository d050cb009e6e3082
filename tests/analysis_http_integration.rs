//! Integration tests for the BRCMA HTTP API.
//!
//! These tests drive the fully assembled router (middleware included) the
//! same way a client would:
//! 1. JSON analysis runs in canonical and legacy field spellings
//! 2. Labelled reports
//! 3. CSV uploads and the template download
//! 4. Error responses for malformed input

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use brcma::adapters::http::{build_router, AnalysisAppState};
use brcma::config::ServerConfig;
use brcma::domain::analysis::Thresholds;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    build_router(AnalysisAppState::default(), &ServerConfig::default())
}

fn app_with_defaults(defaults: Thresholds) -> Router {
    build_router(AnalysisAppState::new(defaults), &ServerConfig::default())
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_csv(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_close(actual: &Value, expected: &[f64]) {
    let actual = actual.as_array().expect("expected a JSON array");
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        let a = a.as_f64().unwrap();
        assert!((a - e).abs() < 1e-4, "expected {e}, got {a}");
    }
}

fn reference_request() -> Value {
    json!({
        "requirements": ["r1", "r2", "r3"],
        "criteria": ["c1", "c2", "c3"],
        "requirementWeights": [1, 1, 1],
        "criterionWeights": [1, 1, 1],
        "matchMatrix": [[0.9, 0.8, 0.6], [0.2, 0.4, 0.3], [0.0, 0.0, 0.0]]
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_probe_is_independent_of_analysis() {
    let (status, body) = send_json(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

// =============================================================================
// JSON Analysis
// =============================================================================

#[tokio::test]
async fn reference_scenario_over_http() {
    let (status, body) = send_json(app(), post_json("/brcma/run", &reference_request())).await;
    assert_eq!(status, StatusCode::OK);

    assert_close(&body["requirementScore"], &[2.3, 0.9, 0.0]);
    assert_close(&body["criterionCoverage"], &[1.1, 1.2, 0.9]);
    assert_close(&body["requirementScoreNorm"], &[1.0, 0.3913, 0.0]);
    assert_close(&body["criterionCoverageNorm"], &[0.9167, 1.0, 0.75]);
    assert_eq!(body["strongRequirements"], json!([0]));
    assert_eq!(body["weakRequirements"], json!([1]));
    assert_eq!(body["riskyRequirements"], json!([2]));
    assert_eq!(body["minimalCriteria"], json!([]));

    let options = body["designOptions"].as_array().unwrap();
    let names: Vec<&str> = options.iter().map(|o| o["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Optimal", "Balanced", "Minimalist", "Enhanced Quality"]);
    assert_eq!(options[0]["requirements"], json!([0]));
    assert_eq!(options[0]["criteria"], json!([0, 1, 2]));
    assert_eq!(options[1]["requirements"], json!([0, 1]));
    assert_eq!(options[3]["criteria"], json!([]));
}

#[tokio::test]
async fn all_zero_matrix_marks_everything_risky_and_minimal() {
    let request = json!({
        "requirements": ["a", "b"],
        "criteria": ["x", "y"],
        "requirementWeights": [3, 0.5],
        "criterionWeights": [2, 7],
        "matchMatrix": [[0, 0], [0, 0]]
    });
    let (status, body) = send_json(app(), post_json("/brcma/run", &request)).await;
    assert_eq!(status, StatusCode::OK);

    assert_close(&body["requirementScore"], &[0.0, 0.0]);
    assert_close(&body["criterionCoverageNorm"], &[0.0, 0.0]);
    assert_eq!(body["strongRequirements"], json!([]));
    assert_eq!(body["weakRequirements"], json!([]));
    assert_eq!(body["riskyRequirements"], json!([0, 1]));
    assert_eq!(body["minimalCriteria"], json!([0, 1]));
}

#[tokio::test]
async fn empty_input_is_not_an_error() {
    let request = json!({
        "requirements": [],
        "criteria": [],
        "requirementWeights": [],
        "criterionWeights": [],
        "matchMatrix": []
    });
    let (status, body) = send_json(app(), post_json("/brcma/run", &request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requirementScore"], json!([]));
    assert_eq!(body["riskyRequirements"], json!([]));
    assert_eq!(body["designOptions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn out_of_range_strengths_are_clamped() {
    let mut clamped = reference_request();
    clamped["matchMatrix"] = json!([[1.0, 0.0], [0.5, 1.0]]);
    clamped["requirements"] = json!(["r1", "r2"]);
    clamped["criteria"] = json!(["c1", "c2"]);
    clamped["requirementWeights"] = json!([1, 1]);
    clamped["criterionWeights"] = json!([1, 1]);

    let mut raw = clamped.clone();
    raw["matchMatrix"] = json!([[4.2, -1.0], [0.5, 9.0]]);

    let (_, expected) = send_json(app(), post_json("/brcma/run", &clamped)).await;
    let (status, actual) = send_json(app(), post_json("/brcma/run", &raw)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn legacy_field_names_give_identical_results() {
    let legacy = json!({
        "R": ["r1", "r2", "r3"],
        "C": ["c1", "c2", "c3"],
        "WRC": [1, 1, 1],
        "WEC": [1, 1, 1],
        "S": [[0.9, 0.8, 0.6], [0.2, 0.4, 0.3], [0.0, 0.0, 0.0]],
        "thr_sr": 0.75,
        "thr_wr": 0.3,
        "thr_mr": 0.3
    });

    let (_, canonical) = send_json(app(), post_json("/brcma/run", &reference_request())).await;
    let (status, aliased) = send_json(app(), post_json("/brcma/run", &legacy)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(aliased, canonical);
}

#[tokio::test]
async fn request_thresholds_override_server_defaults() {
    let lenient = Thresholds::new(0.35, 0.1, 0.3);

    let (_, body) =
        send_json(app_with_defaults(lenient), post_json("/brcma/run", &reference_request())).await;
    assert_eq!(body["strongRequirements"], json!([0, 1]));

    let mut request = reference_request();
    request["thresholds"] = json!({"strong": 0.75});
    let (_, body) = send_json(app_with_defaults(lenient), post_json("/brcma/run", &request)).await;
    assert_eq!(body["strongRequirements"], json!([0]));
    assert_eq!(body["weakRequirements"], json!([1]));
}

#[tokio::test]
async fn minimal_threshold_flags_weak_criteria() {
    let mut request = reference_request();
    request["thresholds"] = json!({"minimal": 0.8});

    let (_, body) = send_json(app(), post_json("/brcma/run", &request)).await;
    assert_eq!(body["minimalCriteria"], json!([2]));

    let options = body["designOptions"].as_array().unwrap();
    assert_eq!(options[0]["criteria"], json!([0, 1]));
    assert_eq!(options[1]["criteria"], json!([0, 1, 2]));
    assert_eq!(options[3]["criteria"], json!([2]));
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn report_labels_every_index() {
    let (status, body) = send_json(app(), post_json("/brcma/report", &reference_request())).await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_eq!(summary["requirementCount"], 3);
    assert_eq!(summary["criterionCount"], 3);
    assert_eq!(summary["strongRequirements"], json!(["r1"]));
    assert_eq!(summary["weakRequirements"], json!(["r2"]));
    assert_eq!(summary["riskyRequirements"], json!(["r3"]));
    assert_eq!(summary["topRequirement"]["label"], "r1");
    assert_eq!(summary["bestCoveredCriterion"]["label"], "c2");
    assert_eq!(summary["designOptions"][1]["requirements"], json!(["r1", "r2"]));
    assert_eq!(body["result"]["riskyRequirements"], json!([2]));
}

// =============================================================================
// CSV
// =============================================================================

#[tokio::test]
async fn template_download_round_trips_through_csv_endpoint() {
    let (status, template) = send(app(), get("/brcma/template")).await;
    assert_eq!(status, StatusCode::OK);

    let template = String::from_utf8(template).unwrap();
    let (status, body) = send_json(app(), post_csv("/brcma/run/csv", &template)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json_body) = send_json(app(), post_json("/brcma/run", &reference_request())).await;
    assert_eq!(body, json_body);
}

#[tokio::test]
async fn csv_weights_are_applied() {
    let csv = ",Speed,Cost,WRC\nFast,1,0,2\nCheap,0,1,1\nWEC,2,1,\n";
    let (status, body) = send_json(app(), post_csv("/brcma/run/csv", csv)).await;
    assert_eq!(status, StatusCode::OK);

    assert_close(&body["requirementScore"], &[2.0, 1.0]);
    assert_close(&body["criterionCoverage"], &[2.0, 1.0]);
    assert_eq!(body["strongRequirements"], json!([0]));
    assert_eq!(body["weakRequirements"], json!([1]));
}

#[tokio::test]
async fn malformed_csv_is_rejected() {
    let (status, body) = send_json(app(), post_csv("/brcma/run/csv", "only,one,row\n")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CSV");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn short_requirement_weights_are_a_client_error() {
    let mut request = reference_request();
    request["requirementWeights"] = json!([1, 1]);

    let (status, body) = send_json(app(), post_json("/brcma/run", &request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SHAPE_MISMATCH");
    assert_eq!(body["details"]["field"], "requirementWeights");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains('3') && message.contains('2'), "{message}");
}

#[tokio::test]
async fn ragged_matrix_is_a_client_error() {
    let mut request = reference_request();
    request["matchMatrix"][1] = json!([0.2, 0.4]);

    let (status, body) = send_json(app(), post_json("/brcma/report", &request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "matchMatrix");
}

#[tokio::test]
async fn missing_field_is_rejected_before_analysis() {
    let request = json!({
        "requirements": ["r1"],
        "criteria": ["c1"],
        "requirementWeights": [1]
    });
    let (status, _) = send(app(), post_json("/brcma/run", &request)).await;
    assert!(status.is_client_error());
    assert_ne!(status, StatusCode::BAD_REQUEST);
}
