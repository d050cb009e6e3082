//! Application router assembly.
//!
//! Mounts every endpoint and wraps them in the shared middleware stack:
//! request ids, tracing, CORS, request timeout and gzip compression.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::analysis::{analysis_router, AnalysisAppState};
use super::health::health_routes;

/// Builds the complete HTTP application.
pub fn build_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(analysis_router())
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// CORS policy for the configured origins. An empty list or `*` allows any
/// origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
