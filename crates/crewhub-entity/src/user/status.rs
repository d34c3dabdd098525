//! User account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account is active and may authenticate.
    Active,
    /// Account has been deactivated by an admin.
    Inactive,
}

impl UserStatus {
    /// Check if an account with this status may pass the access gate.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = crewhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(crewhub_core::AppError::validation(format!(
                "Invalid user status: '{s}'. Expected one of: active, inactive"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(UserStatus::Active.is_active());
        assert!(!UserStatus::Inactive.is_active());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("active".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(
            "Inactive".parse::<UserStatus>().unwrap(),
            UserStatus::Inactive
        );
        assert!("locked".parse::<UserStatus>().is_err());
    }
}
