//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crewhub_core::types::{ProjectId, UserId};

use super::identity::Identity;
use super::role::UserRole;
use super::status::UserStatus;

/// A registered user in the Crewhub system.
///
/// This is the full persisted row, including the secret credential hash.
/// It never crosses the authentication boundary; the gate works with the
/// sanitized [`Identity`] projection instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Human-readable display name.
    pub display_name: String,
    /// Email address.
    pub email: String,
    /// Password hash. Never serialized, never returned by identity lookups.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Department the user belongs to.
    pub department: Option<String>,
    /// Short profile bio.
    pub bio: Option<String>,
    /// Self-reported skills.
    pub skills: Vec<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Projects the user is a member of.
    pub project_ids: Vec<ProjectId>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the account is active.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Project the user into its sanitized [`Identity`], dropping the
    /// credential hash.
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            display_name: self.display_name,
            email: self.email,
            role: self.role,
            status: self.status,
            department: self.department,
            bio: self.bio,
            skills: self.skills,
            avatar_url: self.avatar_url,
            project_ids: self.project_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
