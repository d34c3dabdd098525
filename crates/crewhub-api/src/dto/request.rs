//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token previously issued to the client.
    pub refresh_token: String,
}
