//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and lifetime configuration.
///
/// The secret is loaded once at startup and passed to the token issuer and
/// verifier as an explicit dependency; nothing reads it from a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in hours.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_hours: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_hours: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    24
}

fn default_refresh_ttl() -> u64 {
    7
}
