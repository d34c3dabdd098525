//! Demo-mode fallback configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the degraded-mode demo identity.
///
/// When the identity store is unreachable, a token whose subject equals
/// `subject_id` resolves to a fixed demo identity instead of failing. This
/// keeps one well-known demo credential working through a store outage and
/// nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Whether the fallback identity is enabled at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// The single subject identifier that may resolve to the demo identity.
    #[serde(default = "default_subject_id")]
    pub subject_id: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            subject_id: default_subject_id(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_subject_id() -> String {
    "507f1f77bcf86cd799439011".to_string()
}
