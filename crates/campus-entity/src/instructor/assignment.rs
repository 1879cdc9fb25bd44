//! Course to instructor join rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `course_instructors` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct CourseAssignment {
    /// Assigned course.
    pub course_id: Uuid,
    /// Teaching instructor.
    pub instructor_id: Uuid,
}

/// Request body for assigning a course to an instructor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CourseAssignmentInput {
    /// Course to assign.
    pub course_id: Uuid,
}
