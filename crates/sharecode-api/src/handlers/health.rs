//! Health check handler.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        active_codes: state.registry.len(),
    }))
}
