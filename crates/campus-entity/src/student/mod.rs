//! Student (user account) domain entities.

pub mod model;
pub mod role;

pub use model::{StudentProfile, User};
pub use role::UserRole;
