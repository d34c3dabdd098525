//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use crewhub_auth::gate::access::AccessGate;
use crewhub_auth::gate::store::IdentityStore;
use crewhub_auth::jwt::issuer::TokenIssuer;
use crewhub_auth::jwt::verifier::TokenVerifier;
use crewhub_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks. The identity store is held
/// behind its capability trait so tests can substitute a double.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The access gate guarding protected routes.
    pub gate: Arc<AccessGate>,
    /// Token issuer for the refresh flow.
    pub issuer: Arc<TokenIssuer>,
    /// Token verifier for the refresh flow.
    pub verifier: Arc<TokenVerifier>,
    /// Identity store, exposed for the health endpoint.
    pub store: Arc<dyn IdentityStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("gate", &self.gate)
            .field("issuer", &self.issuer)
            .finish()
    }
}
