//! Readiness probe distinguishing a bound predictor from degraded mode.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

/// GET /health — 200 "ready" when the pipeline is bound, 503 "degraded"
/// when startup artifact loading failed.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    if state.ready() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "degraded" })))
    }
}
