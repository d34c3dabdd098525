//! JWT claims payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewhub_core::types::UserId;

/// Claims embedded in every Crewhub token.
///
/// Validity is determined purely by signature and expiry at verification
/// time; there is no server-side record of issued tokens. Issuance is
/// deterministic for a given subject, secret, and clock, so the payload
/// carries no random component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user identifier.
    pub sub: UserId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject over an explicit validity window.
    pub fn new(sub: UserId, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the subject identifier.
    pub fn subject(&self) -> &UserId {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
