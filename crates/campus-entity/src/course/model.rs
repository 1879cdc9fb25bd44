//! Course entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A course offered by exactly one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Unique course identifier.
    pub id: Uuid,
    /// Course title.
    pub title: String,
    /// Credit value (0 to 10).
    pub credits: i32,
    /// Owning department.
    pub department_id: Uuid,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Course row joined with its department name and dependent counts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseDetail {
    /// Unique course identifier.
    pub id: Uuid,
    /// Course title.
    pub title: String,
    /// Credit value.
    pub credits: i32,
    /// Owning department.
    pub department_id: Uuid,
    /// Owning department name.
    pub department_name: String,
    /// Number of instructors assigned to the course.
    pub instructor_count: i64,
    /// Number of enrolled students.
    pub enrollment_count: i64,
}

/// Data required to create or replace a course.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CourseInput {
    /// Course title.
    #[validate(length(min = 3, max = 50, message = "Title must be between 3 and 50 characters"))]
    pub title: String,
    /// Credit value.
    #[validate(range(min = 0, max = 10, message = "Credits must be between 0 and 10"))]
    pub credits: i32,
    /// Owning department.
    pub department_id: Uuid,
}
