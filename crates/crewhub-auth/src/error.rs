//! Authentication error taxonomy.

use thiserror::Error;

/// Terminal authentication failures.
///
/// Every variant rejects the current request outright; none is retried.
/// The messages are the client-facing strings returned in the 401 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was present.
    #[error("Access denied. No token provided.")]
    NoToken,

    /// The token was malformed, expired, or carried a bad signature.
    #[error("Invalid or expired token.")]
    InvalidToken,

    /// The verified subject has no record in the identity store.
    #[error("User not found.")]
    UserNotFound,

    /// The subject exists but the account has been deactivated.
    #[error("Account has been deactivated.")]
    AccountDeactivated,
}

impl AuthError {
    /// Stable machine-readable code for logs and clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoToken => "NO_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AccountDeactivated => "ACCOUNT_DEACTIVATED",
        }
    }
}

/// A specialized `Result` for gate and verifier operations.
pub type AuthResult<T> = Result<T, AuthError>;
