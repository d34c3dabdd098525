//! # crewhub-api
//!
//! Axum HTTP surface for the Crewhub auth service: the router, the
//! authenticated-user extractor, error-to-response mapping, and the
//! handlers for token refresh, identity echo, and health.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
