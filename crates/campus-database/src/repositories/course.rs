//! Course repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::course::{Course, CourseDetail, CourseInput};

use crate::error::map_sqlx_error;
use crate::integrity::{COURSE_POLICY, DeleteReport, delete_with_policy};

const DETAIL_SELECT: &str = "SELECT c.id, c.title, c.credits, c.department_id, \
     d.name AS department_name, \
     (SELECT COUNT(*) FROM course_instructors ci WHERE ci.course_id = c.id) AS instructor_count, \
     (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS enrollment_count \
     FROM courses c \
     JOIN departments d ON d.id = c.department_id";

/// Repository for course CRUD and projections.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a course by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find course"))
    }

    /// Find a course joined with its department name and counts.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<CourseDetail>> {
        sqlx::query_as::<_, CourseDetail>(&format!("{DETAIL_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to load course detail"))
    }

    /// List course projections ordered by title.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<CourseDetail>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count courses"))?;

        let items = sqlx::query_as::<_, CourseDetail>(&format!(
            "{DETAIL_SELECT} ORDER BY c.title ASC, c.id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list courses"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Insert a new course.
    pub async fn create(&self, data: &CourseInput) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (id, title, credits, department_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(data.credits)
        .bind(data.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create course"))
    }

    /// Replace a course's fields. Returns `None` when it does not exist.
    pub async fn update(&self, id: Uuid, data: &CourseInput) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>(
            "UPDATE courses \
             SET title = $2, credits = $3, department_id = $4, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.credits)
        .bind(data.department_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update course"))
    }

    /// Delete a course together with its enrollments and assignments.
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteReport> {
        delete_with_policy(&self.pool, &COURSE_POLICY, id).await
    }
}
