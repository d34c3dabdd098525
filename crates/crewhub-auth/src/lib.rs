//! # crewhub-auth
//!
//! Token issuance and bearer-token access gating for Crewhub.
//!
//! ## Modules
//!
//! - `jwt` — claims, token issuance (access + refresh), and verification
//! - `gate` — the access gate, the identity-store capability, and the
//!   demo-identity fallback for degraded operation
//! - `error` — the terminal authentication error taxonomy

pub mod error;
pub mod gate;
pub mod jwt;

pub use error::AuthError;
pub use gate::{AccessGate, DatabaseIdentityStore, DemoIdentity, FallbackIdentity, IdentityStore};
pub use jwt::{Claims, IssuedToken, TokenIssuer, TokenPair, TokenVerifier};
