//! Health handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Readiness probe; verifies the backing store answers
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    match state.service.ping_store().await {
        Ok(()) => Ok(Json(json!({ "status": "ready" }))),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
