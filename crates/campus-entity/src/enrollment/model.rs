//! Enrollment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A student's registration in a course. `(student_id, course_id)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    /// Unique enrollment identifier.
    pub id: Uuid,
    /// Enrolled course.
    pub course_id: Uuid,
    /// Enrolled student.
    pub student_id: Uuid,
    /// Grade between 0 and 100, once awarded.
    pub grade: Option<i32>,
    /// When the enrollment was created.
    pub created_at: DateTime<Utc>,
    /// When the enrollment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Enrollment joined with course, department and student names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EnrollmentDetail {
    /// Unique enrollment identifier.
    pub id: Uuid,
    /// Course ID.
    pub course_id: Uuid,
    /// Course title.
    pub course_title: String,
    /// Course credits.
    pub credits: i32,
    /// Department offering the course.
    pub department_id: Uuid,
    /// Department name.
    pub department_name: String,
    /// Student ID.
    pub student_id: Uuid,
    /// Student full name.
    pub student_name: String,
    /// Grade.
    pub grade: Option<i32>,
}

/// Data required to create or replace an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnrollmentInput {
    /// Student to enroll.
    pub student_id: Uuid,
    /// Course to enroll in.
    pub course_id: Uuid,
    /// Grade.
    #[serde(default)]
    #[validate(range(min = 0, max = 100, message = "Grade must be between 0 and 100"))]
    pub grade: Option<i32>,
}

/// Optional filters for listing enrollments.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnrollmentFilter {
    /// Only enrollments of this student.
    pub student_id: Option<Uuid>,
    /// Only enrollments in this course.
    pub course_id: Option<Uuid>,
}
