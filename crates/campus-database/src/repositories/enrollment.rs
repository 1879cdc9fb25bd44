//! Enrollment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::enrollment::{Enrollment, EnrollmentDetail, EnrollmentFilter, EnrollmentInput};

use crate::error::map_sqlx_error;

const DETAIL_SELECT: &str = "SELECT e.id, e.course_id, c.title AS course_title, c.credits, \
     c.department_id, d.name AS department_name, e.student_id, \
     u.first_name || ' ' || u.last_name AS student_name, e.grade \
     FROM enrollments e \
     JOIN courses c ON c.id = e.course_id \
     JOIN departments d ON d.id = c.department_id \
     JOIN users u ON u.id = e.student_id";

const FILTER: &str = "($1::uuid IS NULL OR e.student_id = $1) AND ($2::uuid IS NULL OR e.course_id = $2)";

/// Repository for enrollment CRUD and projections.
#[derive(Debug, Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    /// Create a new enrollment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an enrollment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find enrollment"))
    }

    /// Find an enrollment joined with course, department and student names.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<EnrollmentDetail>> {
        sqlx::query_as::<_, EnrollmentDetail>(&format!("{DETAIL_SELECT} WHERE e.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to load enrollment detail"))
    }

    /// List enrollment projections matching the filter.
    pub async fn find_all(
        &self,
        filter: &EnrollmentFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<EnrollmentDetail>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM enrollments e WHERE {FILTER}"
        ))
        .bind(filter.student_id)
        .bind(filter.course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to count enrollments"))?;

        let items = sqlx::query_as::<_, EnrollmentDetail>(&format!(
            "{DETAIL_SELECT} WHERE {FILTER} \
             ORDER BY c.title ASC, u.last_name ASC, e.id ASC LIMIT $3 OFFSET $4"
        ))
        .bind(filter.student_id)
        .bind(filter.course_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list enrollments"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Insert a new enrollment. A duplicate `(student, course)` pair is a
    /// conflict.
    pub async fn create(&self, data: &EnrollmentInput) -> AppResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (id, course_id, student_id, grade) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.course_id)
        .bind(data.student_id)
        .bind(data.grade)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create enrollment"))
    }

    /// Replace an enrollment's fields. Returns `None` when it does not exist.
    pub async fn update(&self, id: Uuid, data: &EnrollmentInput) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, Enrollment>(
            "UPDATE enrollments \
             SET course_id = $2, student_id = $3, grade = $4, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.course_id)
        .bind(data.student_id)
        .bind(data.grade)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update enrollment"))
    }

    /// Delete an enrollment. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete enrollment"))?;
        Ok(result.rows_affected() > 0)
    }
}
