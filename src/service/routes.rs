//! Axum routes for the introspection service.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::InspectError;
use crate::registry::{InMemoryRegistry, MetadataRegistry};
use crate::types::QueryParams;
use crate::INSPECT_SCHEMA_VERSION;

use super::middleware::record_query_metrics;
use super::state::ServiceState;

/// Type alias for the service state with the in-memory registry.
pub type AppState = ServiceState<InMemoryRegistry>;

// ============================================================================
// Response Types
// ============================================================================

/// Service health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`; this layer has no failing dependencies.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Response schema version.
    pub schema_version: String,
    /// Registered endpoint groups.
    pub endpoint_groups: usize,
    /// Registered services.
    pub services: usize,
    /// Canonical fingerprint of the current registry snapshot.
    pub snapshot_fingerprint: String,
    /// Seconds since service start.
    pub uptime_seconds: i64,
}

/// Simple liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct LivenessResponse {
    /// Always `"alive"`.
    pub status: String,
}

/// Structured error response with a correlation ID for tracing.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
    /// Correlation ID for request tracing.
    pub correlation_id: String,
}

impl ErrorResponse {
    /// Create an error response with a fresh correlation ID.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(
            code = %self.code,
            error = %self.error,
            correlation_id = %self.correlation_id,
            "request failed"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Serialize a payload, surfacing failure as the layer's one propagated
/// error class.
fn to_json<T: Serialize>(payload: &T) -> Result<Json<Value>, ErrorResponse> {
    serde_json::to_value(payload).map(Json).map_err(|err| {
        let err = InspectError::from(err);
        ErrorResponse::new("SERIALIZATION_FAILED", err.to_string())
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Query endpoint metadata with filtering, sorting, and pagination.
async fn endpoints_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ErrorResponse> {
    let query = QueryParams::from_pairs(pairs);
    let response = state.engine.query_endpoints(&query);
    record_query_metrics("endpoint", response.total, response.data.len());
    to_json(&response)
}

/// Query service metadata with filtering, sorting, and pagination.
async fn services_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ErrorResponse> {
    let query = QueryParams::from_pairs(pairs);
    let response = state.engine.query_services(&query);
    record_query_metrics("service", response.total, response.data.len());
    to_json(&response)
}

/// Endpoint counts grouped by application.
async fn endpoint_stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ErrorResponse> {
    to_json(&state.engine.endpoint_stats())
}

/// Service counts grouped by protocol.
async fn service_stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ErrorResponse> {
    to_json(&state.engine.service_stats())
}

/// Query the resolved configuration tree.
async fn config_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ErrorResponse> {
    let query = QueryParams::from_pairs(pairs);
    to_json(&state.engine.query_config(&query))
}

/// Legacy configuration surface: namespace sub-tree as a mapping.
async fn configuration_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ErrorResponse> {
    let query = QueryParams::from_pairs(pairs);
    to_json(&state.engine.query_configuration(&query))
}

/// Query the process environment.
async fn env_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ErrorResponse> {
    let query = QueryParams::from_pairs(pairs);
    to_json(&state.engine.query_env(&query))
}

/// Health check endpoint.
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let registry = state.engine.registry();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: INSPECT_SCHEMA_VERSION.to_string(),
        endpoint_groups: registry.group_count(),
        services: registry.service_count(),
        snapshot_fingerprint: registry.fingerprint(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Liveness probe endpoint.
async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".to_string(),
    })
}

// ============================================================================
// Router Construction
// ============================================================================

/// Create the axum router for the introspection service.
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Metadata queries
        .route("/api/endpoints", get(endpoints_handler))
        .route("/api/services", get(services_handler))
        // Stats
        .route("/api/stats/endpoints", get(endpoint_stats_handler))
        .route("/api/stats/services", get(service_stats_handler))
        // Config and environment
        .route("/api/config", get(config_handler))
        .route("/api/configuration", get(configuration_handler))
        .route("/api/env", get(env_handler))
        // Health checks
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .with_state(state)
}
