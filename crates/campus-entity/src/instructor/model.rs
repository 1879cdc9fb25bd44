//! Instructor entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A teaching staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email; unique across instructors.
    pub email: String,
    /// Date the instructor was hired.
    pub hire_date: NaiveDate,
    /// Department the instructor belongs to, if any.
    pub department_id: Option<Uuid>,
    /// When the instructor was created.
    pub created_at: DateTime<Utc>,
    /// When the instructor was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Instructor {
    /// Display name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Instructor joined with department name, office and course count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InstructorDetail {
    /// Unique instructor identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Department ID.
    pub department_id: Option<Uuid>,
    /// Department name.
    pub department_name: Option<String>,
    /// Office location, when an office is assigned.
    pub office_location: Option<String>,
    /// Number of courses the instructor teaches.
    pub course_count: i64,
}

/// Data required to create or replace an instructor.
///
/// `office_location` replaces the office assignment: `Some` upserts it,
/// `None` removes any existing one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InstructorInput {
    /// Given name.
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    pub last_name: String,
    /// Contact email.
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Department ID.
    #[serde(default)]
    pub department_id: Option<Uuid>,
    /// Office location.
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Office location must be between 1 and 50 characters"))]
    pub office_location: Option<String>,
}
