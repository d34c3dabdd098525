//! `AuthUser` extractor — routes the request through the access gate and
//! injects the resolved identity.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crewhub_entity::user::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// A handler taking `AuthUser` cannot run unless the gate succeeded, so by
/// construction it observes exactly one fully-resolved, active identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    /// Returns the inner [`Identity`].
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let identity = state.gate.authorize(authorization).await?;
        Ok(AuthUser(identity))
    }
}
