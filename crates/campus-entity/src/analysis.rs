//! Dashboard aggregate projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Enrollment count for one department.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentEnrollmentCount {
    /// Department ID.
    pub department_id: Uuid,
    /// Department name.
    pub department_name: String,
    /// Enrollments in courses offered by the department.
    pub enrollment_count: i64,
}

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of departments.
    pub department_count: i64,
    /// Number of courses.
    pub course_count: i64,
    /// Number of instructors.
    pub instructor_count: i64,
    /// Number of student accounts.
    pub student_count: i64,
    /// Number of enrollments.
    pub enrollment_count: i64,
    /// Mean of awarded grades; `None` before any grade exists.
    pub average_grade: Option<f64>,
    /// Enrollments per department, busiest first.
    pub by_department: Vec<DepartmentEnrollmentCount>,
}
