//! Office assignment, at most one per instructor.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An instructor's office. The instructor ID is also the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OfficeAssignment {
    /// Owning instructor.
    pub instructor_id: Uuid,
    /// Room or building location.
    pub location: String,
}
