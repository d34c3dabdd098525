//! Identity store capability and its database implementation.

use async_trait::async_trait;

use crewhub_core::result::AppResult;
use crewhub_core::types::UserId;
use crewhub_database::{DatabasePool, UserRepository};
use crewhub_entity::user::Identity;

/// Capability interface over the persistent identity store.
///
/// The gate depends on this trait rather than any concrete driver, so the
/// degraded-mode policy stays decoupled from connection internals and tests
/// can substitute a double.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Whether the backing store can currently serve lookups.
    ///
    /// Polled once per gate pass; implementations must not cache the
    /// answer across requests.
    async fn is_available(&self) -> bool;

    /// Look up the sanitized identity for a subject identifier.
    ///
    /// Implementations must exclude secret credential fields from the
    /// returned projection.
    async fn find_identity(&self, id: &UserId) -> AppResult<Option<Identity>>;
}

/// [`IdentityStore`] backed by the PostgreSQL user repository.
#[derive(Debug, Clone)]
pub struct DatabaseIdentityStore {
    pool: DatabasePool,
    users: UserRepository,
}

impl DatabaseIdentityStore {
    /// Create a store over an established connection pool.
    pub fn new(pool: DatabasePool) -> Self {
        let users = UserRepository::new(pool.pool().clone());
        Self { pool, users }
    }
}

#[async_trait]
impl IdentityStore for DatabaseIdentityStore {
    async fn is_available(&self) -> bool {
        self.pool.health_check().await.unwrap_or(false)
    }

    async fn find_identity(&self, id: &UserId) -> AppResult<Option<Identity>> {
        self.users.find_identity_by_id(id).await
    }
}
