//! JWT claims, token issuance, and verification.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use issuer::{IssuedToken, TokenIssuer, TokenPair};
pub use verifier::TokenVerifier;
