//! # crewhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for Crewhub entities.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::user::UserRepository;
