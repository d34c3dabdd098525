//! Token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crewhub_core::config::auth::AuthConfig;
use crewhub_core::error::AppError;
use crewhub_core::types::UserId;

use super::claims::Claims;

/// Creates signed access and refresh tokens.
///
/// The signing secret is injected at construction; the issuer keeps no
/// record of what it signs.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token lifetime.
    access_ttl: Duration,
    /// Refresh token lifetime.
    refresh_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// A single signed token and its expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::hours(config.access_ttl_hours as i64),
            refresh_ttl: Duration::days(config.refresh_ttl_days as i64),
        }
    }

    /// Issues a short-lived access token for the given subject.
    pub fn issue_access(&self, subject: &UserId) -> Result<IssuedToken, AppError> {
        self.issue(subject, self.access_ttl)
    }

    /// Issues a long-lived refresh token for the given subject.
    pub fn issue_refresh(&self, subject: &UserId) -> Result<IssuedToken, AppError> {
        self.issue(subject, self.refresh_ttl)
    }

    /// Issues a fresh access + refresh pair for the given subject.
    pub fn issue_pair(&self, subject: &UserId) -> Result<TokenPair, AppError> {
        let access = self.issue_access(subject)?;
        let refresh = self.issue_refresh(subject)?;
        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
            access_expires_at: access.expires_at,
            refresh_expires_at: refresh.expires_at,
        })
    }

    fn issue(&self, subject: &UserId, ttl: Duration) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;
        let claims = Claims::new(subject.clone(), now, expires_at);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::verifier::TokenVerifier;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            access_ttl_hours: 24,
            refresh_ttl_days: 7,
        }
    }

    #[test]
    fn test_access_round_trip() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let subject = UserId::new("64a51d2f8c1b2a0012345678");
        let issued = issuer.issue_access(&subject).unwrap();
        let claims = verifier.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_access_expiry_is_one_day_out() {
        let issuer = TokenIssuer::new(&test_config());
        let before = Utc::now();
        let issued = issuer.issue_access(&UserId::new("a".repeat(24))).unwrap();
        let after = Utc::now();

        assert!(issued.expires_at >= before + Duration::hours(24));
        assert!(issued.expires_at <= after + Duration::hours(24));
    }

    #[test]
    fn test_refresh_expiry_is_seven_days_out() {
        let issuer = TokenIssuer::new(&test_config());
        let before = Utc::now();
        let issued = issuer.issue_refresh(&UserId::new("a".repeat(24))).unwrap();
        let after = Utc::now();

        assert!(issued.expires_at >= before + Duration::days(7));
        assert!(issued.expires_at <= after + Duration::days(7));
    }

    #[test]
    fn test_pair_shares_subject() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let subject = UserId::new("507f1f77bcf86cd799439011");
        let pair = issuer.issue_pair(&subject).unwrap();

        assert_eq!(verifier.verify(&pair.access_token).unwrap().sub, subject);
        assert_eq!(verifier.verify(&pair.refresh_token).unwrap().sub, subject);
        assert!(pair.refresh_expires_at > pair.access_expires_at);
    }
}
