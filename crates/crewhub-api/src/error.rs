//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crewhub_auth::error::AuthError;
use crewhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

/// Wrapper giving domain errors an HTTP rendering.
///
/// Handlers and extractors return this type so `?` works on both the gate's
/// [`AuthError`] taxonomy and the general [`AppError`].
#[derive(Debug)]
pub enum ApiError {
    /// Authentication failure from the access gate or token verifier.
    Auth(AuthError),
    /// Any other application error.
    App(AppError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Every authentication failure is terminal and surfaces as 401.
            Self::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            Self::App(err) => {
                let status = match err.kind {
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
                    ErrorKind::Validation => StatusCode::BAD_REQUEST,
                    ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                    ErrorKind::Internal | ErrorKind::Database | ErrorKind::Configuration => {
                        tracing::error!(error = %err, "Internal server error");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    // Do not leak internals to the client.
                    "Internal server error.".to_string()
                } else {
                    err.message
                };
                (status, message)
            }
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
