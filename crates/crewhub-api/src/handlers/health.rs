//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Reports identity-store availability. The probe is the same per-call
/// readiness signal the access gate polls.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_up = state.store.is_available().await;

    Json(HealthResponse {
        status: if store_up { "ok" } else { "degraded" }.to_string(),
        database: if store_up { "up" } else { "down" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
