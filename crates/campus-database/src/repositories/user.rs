//! User repository implementation. Students and administrators share one
//! table distinguished by role.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::student::{StudentProfile, User, UserRole};

use crate::error::map_sqlx_error;
use crate::integrity::{DeleteReport, STUDENT_POLICY, delete_with_policy};

/// Repository for user account CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find user by id"))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find user by email"))
    }

    /// List users with the given role, ordered by name.
    pub async fn find_by_role(
        &self,
        role: UserRole,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count users by role"))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = $1 \
             ORDER BY last_name ASC, first_name ASC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(role)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list users by role"))?;

        Ok(PageResponse::new(users, page, total as u64))
    }

    /// Insert a new account.
    pub async fn create(
        &self,
        profile: &StudentProfile,
        password_hash: Option<&str>,
        role: UserRole,
    ) -> AppResult<User> {
        let enrollment_date = profile
            .enrollment_date
            .unwrap_or_else(|| Utc::now().date_naive());

        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, first_name, last_name, email, password_hash, role, \
                                enrollment_date, department_id, phone_number, address, date_of_birth) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(password_hash)
        .bind(role)
        .bind(enrollment_date)
        .bind(profile.department_id)
        .bind(&profile.phone_number)
        .bind(&profile.address)
        .bind(profile.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create user"))
    }

    /// Replace a user's profile fields. The enrollment date is kept when
    /// the profile omits it. Returns `None` when the user does not exist.
    pub async fn update_profile(&self, id: Uuid, profile: &StudentProfile) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users \
             SET first_name = $2, last_name = $3, email = $4, \
                 enrollment_date = COALESCE($5, enrollment_date), department_id = $6, \
                 phone_number = $7, address = $8, date_of_birth = $9, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(profile.enrollment_date)
        .bind(profile.department_id)
        .bind(&profile.phone_number)
        .bind(&profile.address)
        .bind(profile.date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update user"))
    }

    /// Delete an account together with its enrollments.
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteReport> {
        delete_with_policy(&self.pool, &STUDENT_POLICY, id).await
    }
}
