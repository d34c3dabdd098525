//! Auth handlers — token refresh and identity echo.

use axum::Json;
use axum::extract::State;

use crewhub_entity::user::Identity;

use crate::dto::request::RefreshRequest;
use crate::dto::response::{ApiResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/refresh
///
/// Verifies a refresh token against the shared secret and mints a fresh
/// access/refresh pair for the same subject. Stateless: no session row is
/// consulted or written.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let claims = state.verifier.verify(&req.refresh_token)?;
    let pair = state.issuer.issue_pair(claims.subject())?;
    Ok(Json(ApiResponse::ok(TokenResponse::from(pair))))
}

/// GET /api/auth/me
///
/// Returns the identity the gate attached to this request. `Identity` is
/// already the sanitized projection, so it serializes directly.
pub async fn me(auth: AuthUser) -> Json<ApiResponse<Identity>> {
    Json(ApiResponse::ok(auth.0))
}
