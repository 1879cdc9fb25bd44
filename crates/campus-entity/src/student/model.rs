//! User account model. Students and administrators share the `users` table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::role::UserRole;

/// A user account row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email; unique across users.
    pub email: String,
    /// Argon2id hash. Accounts without one cannot log in.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Role tag.
    pub role: UserRole,
    /// Date the student enrolled at the school.
    pub enrollment_date: NaiveDate,
    /// Department the student belongs to, if any.
    pub department_id: Option<Uuid>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the account can authenticate with a password.
    pub fn can_login(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Profile fields a student record is created or replaced with.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentProfile {
    /// Given name.
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    pub last_name: String,
    /// Login email.
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
    /// Enrollment date; defaults to today when omitted.
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
    /// Department ID.
    #[serde(default)]
    pub department_id: Option<Uuid>,
    /// Phone number.
    #[serde(default)]
    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    pub phone_number: Option<String>,
    /// Postal address.
    #[serde(default)]
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}
