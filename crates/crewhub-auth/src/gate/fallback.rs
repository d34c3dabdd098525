//! Fallback identity provider for degraded operation.

use chrono::DateTime;

use crewhub_core::config::demo::DemoConfig;
use crewhub_core::types::{ProjectId, UserId};
use crewhub_entity::user::{Identity, UserRole, UserStatus};

/// Capability interface for resolving an identity without the store.
///
/// Consulted by the gate only while the identity store is unavailable.
/// Providers decide which subjects they cover; everything else returns
/// `None` and falls through to the (failing) lookup path.
pub trait FallbackIdentity: Send + Sync {
    /// Resolve a subject to a fallback identity, if this provider covers it.
    fn resolve(&self, subject: &UserId) -> Option<Identity>;
}

/// The built-in demo identity, bound to one sentinel subject.
///
/// Keeps the well-known demo credential working through a store outage.
/// The identity is process-constant and never persisted.
#[derive(Debug, Clone)]
pub struct DemoIdentity {
    enabled: bool,
    subject: UserId,
    identity: Identity,
}

impl DemoIdentity {
    /// Build the provider from demo configuration.
    pub fn new(config: &DemoConfig) -> Self {
        let subject = UserId::new(config.subject_id.clone());
        Self {
            enabled: config.enabled,
            identity: demo_identity(subject.clone()),
            subject,
        }
    }
}

impl FallbackIdentity for DemoIdentity {
    fn resolve(&self, subject: &UserId) -> Option<Identity> {
        if self.enabled && *subject == self.subject {
            Some(self.identity.clone())
        } else {
            None
        }
    }
}

/// The fixed demo profile. Timestamps are pinned so repeated degraded-mode
/// requests observe an identical identity.
fn demo_identity(id: UserId) -> Identity {
    let pinned = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    Identity {
        id,
        display_name: "Demo User".to_string(),
        email: "demo@crewhub.app".to_string(),
        role: UserRole::Member,
        status: UserStatus::Active,
        department: Some("Product".to_string()),
        bio: Some("Built-in demo account for exploring Crewhub.".to_string()),
        skills: vec!["planning".to_string(), "collaboration".to_string()],
        avatar_url: Some("/assets/avatars/demo.png".to_string()),
        project_ids: vec![ProjectId::new("507f1f77bcf86cd799439012")],
        created_at: pinned,
        updated_at: pinned,
    }
}
