//! # campus-database
//!
//! PostgreSQL connection management, embedded migrations, the delete policy
//! executor and concrete repositories for all Campus Admin entities.

pub mod connection;
pub mod error;
pub mod integrity;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use error::map_sqlx_error;
