//! The access gate and its collaborator capabilities.

pub mod access;
pub mod fallback;
pub mod store;

pub use access::AccessGate;
pub use fallback::{DemoIdentity, FallbackIdentity};
pub use store::{DatabaseIdentityStore, IdentityStore};
