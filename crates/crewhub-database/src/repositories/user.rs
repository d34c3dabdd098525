//! User repository implementation.

use sqlx::PgPool;

use crewhub_core::error::{AppError, ErrorKind};
use crewhub_core::result::AppResult;
use crewhub_core::types::UserId;
use crewhub_entity::user::Identity;

/// Columns of the sanitized identity projection.
///
/// `password_hash` is deliberately absent; identity lookups must never
/// carry the credential hash out of the database layer.
const IDENTITY_COLUMNS: &str = "id, display_name, email, role, status, department, bio, \
     skills, avatar_url, project_ids, created_at, updated_at";

/// Repository for user lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the sanitized identity projection by primary key.
    pub async fn find_identity_by_id(&self, id: &UserId) -> AppResult<Option<Identity>> {
        let query = format!("SELECT {IDENTITY_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, Identity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find identity by id", e)
            })
    }
}
