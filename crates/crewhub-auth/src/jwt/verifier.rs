//! Token verification against the shared secret.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crewhub_core::config::auth::AuthConfig;

use super::claims::Claims;
use crate::error::{AuthError, AuthResult};

/// Verifies token signatures and expiry.
///
/// Malformed tokens, bad signatures, and expired tokens all collapse into
/// [`AuthError::InvalidToken`]; the underlying cause is logged, not
/// surfaced to the caller.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning its claims.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => {
                debug!(reason = %e, "Token verification failed");
                Err(AuthError::InvalidToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::issuer::TokenIssuer;
    use chrono::{Duration, Utc};
    use crewhub_core::types::UserId;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            access_ttl_hours: 24,
            refresh_ttl_days: 7,
        }
    }

    #[test]
    fn test_rejects_garbage() {
        let verifier = TokenVerifier::new(&config("secret-a"));
        assert_eq!(
            verifier.verify("not-a-token").unwrap_err(),
            AuthError::InvalidToken
        );
        assert_eq!(verifier.verify("").unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let issuer = TokenIssuer::new(&config("secret-a"));
        let verifier = TokenVerifier::new(&config("secret-b"));

        let issued = issuer.issue_access(&UserId::new("a".repeat(24))).unwrap();
        assert_eq!(
            verifier.verify(&issued.token).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_rejects_expired() {
        let cfg = config("secret-a");
        let verifier = TokenVerifier::new(&cfg);

        // Hand-sign a token whose expiry is far in the past.
        let now = Utc::now();
        let claims = Claims::new(
            UserId::new("a".repeat(24)),
            now - Duration::days(2),
            now - Duration::days(1),
        );
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(verifier.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_accepts_valid() {
        let cfg = config("secret-a");
        let issuer = TokenIssuer::new(&cfg);
        let verifier = TokenVerifier::new(&cfg);

        let subject = UserId::new("507f1f77bcf86cd799439011");
        let issued = issuer.issue_access(&subject).unwrap();
        let claims = verifier.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, subject);
        assert!(!claims.is_expired());
    }
}
