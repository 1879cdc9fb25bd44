//! Department entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// An academic department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Yearly budget; never negative.
    pub budget: f64,
    /// Date the department was founded.
    pub start_date: NaiveDate,
    /// Instructor administering the department, if any.
    pub administrator_id: Option<Uuid>,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Department row joined with its administrator name and dependent counts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentDetail {
    /// Unique department identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Yearly budget.
    pub budget: f64,
    /// Date the department was founded.
    pub start_date: NaiveDate,
    /// Administrator instructor ID.
    pub administrator_id: Option<Uuid>,
    /// Administrator full name.
    pub administrator_name: Option<String>,
    /// Number of courses offered by the department.
    pub course_count: i64,
    /// Number of instructors belonging to the department.
    pub instructor_count: i64,
    /// Number of students belonging to the department.
    pub student_count: i64,
}

/// Data required to create or replace a department.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DepartmentInput {
    /// Department name.
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
    /// Yearly budget.
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: f64,
    /// Founding date.
    pub start_date: NaiveDate,
    /// Administrator instructor ID.
    #[serde(default)]
    pub administrator_id: Option<Uuid>,
}
