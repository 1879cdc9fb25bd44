//! # campus-entity
//!
//! Domain entity models for Campus Admin. Every struct in this crate
//! represents a database table row, a validated input record, or a joined
//! read projection. Row types derive `sqlx::FromRow`; input records derive
//! `validator::Validate` and carry the shape rules for their table.

pub mod analysis;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod validation;

pub use validation::validate_input;
