//! Request DTOs not covered by entity input records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_entity::enrollment::EnrollmentFilter;

use crate::extractors::PaginationParams;

/// Query string of `GET /api/enrollment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentQuery {
    /// Page number.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Only this student's enrollments.
    pub student_id: Option<Uuid>,
    /// Only enrollments in this course.
    pub course_id: Option<Uuid>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    campus_core::types::pagination::DEFAULT_PAGE_SIZE
}

impl EnrollmentQuery {
    /// Splits into the repository filter and pagination.
    pub fn into_parts(self) -> (EnrollmentFilter, PaginationParams) {
        (
            EnrollmentFilter {
                student_id: self.student_id,
                course_id: self.course_id,
            },
            PaginationParams {
                page: self.page,
                per_page: self.per_page,
            },
        )
    }
}
