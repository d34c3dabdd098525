//! # crewhub-entity
//!
//! Domain entity models for Crewhub: user accounts and the sanitized
//! identity projection attached to authenticated requests.

pub mod user;

pub use user::{Identity, User, UserRole, UserStatus};
