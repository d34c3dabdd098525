//! The access gate: bearer-token authorization in front of protected
//! operations.

use std::sync::Arc;

use tracing::warn;

use crewhub_entity::user::Identity;

use super::fallback::FallbackIdentity;
use super::store::IdentityStore;
use crate::error::{AuthError, AuthResult};
use crate::jwt::verifier::TokenVerifier;

/// Authorizes inbound requests and resolves their identity.
///
/// Every failure is terminal for the current request; the gate never
/// retries. The only alternate success path is the demo-identity fallback,
/// taken exclusively while the store is unavailable and only for the
/// provider's sentinel subject.
#[derive(Clone)]
pub struct AccessGate {
    verifier: TokenVerifier,
    store: Arc<dyn IdentityStore>,
    fallback: Arc<dyn FallbackIdentity>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("verifier", &self.verifier)
            .finish()
    }
}

impl AccessGate {
    /// Create a gate from its collaborators.
    pub fn new(
        verifier: TokenVerifier,
        store: Arc<dyn IdentityStore>,
        fallback: Arc<dyn FallbackIdentity>,
    ) -> Self {
        Self {
            verifier,
            store,
            fallback,
        }
    }

    /// Authorize a request from its `Authorization` header value.
    ///
    /// Succeeds with the resolved, active identity or fails with one of the
    /// terminal [`AuthError`] kinds:
    ///
    /// 1. The header must be present and of the form `Bearer <token>`.
    /// 2. The token must verify against the shared secret (signature and
    ///    expiry).
    /// 3. Store availability is polled; while unavailable, the fallback
    ///    provider may short-circuit to its fixed identity.
    /// 4. Otherwise the subject is looked up in the store, excluding secret
    ///    fields, and must exist and be active.
    pub async fn authorize(&self, authorization: Option<&str>) -> AuthResult<Identity> {
        let header = authorization.ok_or(AuthError::NoToken)?;
        let token = header.strip_prefix("Bearer ").ok_or(AuthError::NoToken)?;

        let claims = self.verifier.verify(token)?;

        if !self.store.is_available().await {
            if let Some(identity) = self.fallback.resolve(&claims.sub) {
                warn!(
                    subject = %claims.sub,
                    "Identity store unavailable; serving fallback identity"
                );
                return Ok(identity);
            }
        }

        let identity = match self.store.find_identity(&claims.sub).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(subject = %claims.sub, error = %e, "Identity lookup failed");
                None
            }
        };

        let identity = identity.ok_or(AuthError::UserNotFound)?;
        if !identity.is_active() {
            return Err(AuthError::AccountDeactivated);
        }

        Ok(identity)
    }
}
