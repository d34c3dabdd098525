//! The sanitized identity attached to authenticated requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crewhub_core::types::{ProjectId, UserId};

use super::role::UserRole;
use super::status::UserStatus;

/// The resolved identity of an authenticated caller.
///
/// A projection of [`super::User`] with the credential hash excluded.
/// Requests either carry no identity (rejected before the handler runs) or
/// exactly one active `Identity`, never a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Identity {
    /// Unique user identifier.
    pub id: UserId,
    /// Human-readable display name.
    pub display_name: String,
    /// Email address.
    pub email: String,
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

impl Identity {
    /// Check if the account behind this identity is active.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Check if this identity has admin privileges.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
