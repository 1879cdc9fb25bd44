//! Instructor repository implementation, including office and course
//! assignments.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::course::Course;
use campus_entity::instructor::{
    CourseAssignment, Instructor, InstructorDetail, InstructorInput, OfficeAssignment,
};

use crate::error::map_sqlx_error;
use crate::integrity::{DeleteReport, INSTRUCTOR_POLICY, delete_with_policy};

const DETAIL_SELECT: &str = "SELECT i.id, i.first_name, i.last_name, i.email, i.hire_date, \
     i.department_id, d.name AS department_name, o.location AS office_location, \
     (SELECT COUNT(*) FROM course_instructors ci WHERE ci.instructor_id = i.id) AS course_count \
     FROM instructors i \
     LEFT JOIN departments d ON d.id = i.department_id \
     LEFT JOIN office_assignments o ON o.instructor_id = i.id";

/// Repository for instructor CRUD, offices and course assignments.
#[derive(Debug, Clone)]
pub struct InstructorRepository {
    pool: PgPool,
}

impl InstructorRepository {
    /// Create a new instructor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an instructor by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Instructor>> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find instructor"))
    }

    /// Find an instructor joined with department, office and course count.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<InstructorDetail>> {
        sqlx::query_as::<_, InstructorDetail>(&format!("{DETAIL_SELECT} WHERE i.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to load instructor detail"))
    }

    /// List instructor projections ordered by name.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<InstructorDetail>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM instructors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count instructors"))?;

        let items = sqlx::query_as::<_, InstructorDetail>(&format!(
            "{DETAIL_SELECT} ORDER BY i.last_name ASC, i.first_name ASC, i.id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list instructors"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Find an instructor's office, if one is assigned.
    pub async fn find_office(&self, instructor_id: Uuid) -> AppResult<Option<OfficeAssignment>> {
        sqlx::query_as::<_, OfficeAssignment>(
            "SELECT * FROM office_assignments WHERE instructor_id = $1",
        )
        .bind(instructor_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to find office assignment"))
    }

    /// Insert an instructor and its optional office in one transaction.
    pub async fn create(&self, data: &InstructorInput) -> AppResult<Instructor> {
        let mut tx = self.begin().await?;

        let instructor = sqlx::query_as::<_, Instructor>(
            "INSERT INTO instructors (id, first_name, last_name, email, hire_date, department_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.hire_date)
        .bind(data.department_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create instructor"))?;

        replace_office(&mut tx, instructor.id, data.office_location.as_deref()).await?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to commit instructor"))?;
        Ok(instructor)
    }

    /// Replace an instructor's fields and office. Returns `None` when the
    /// instructor does not exist.
    pub async fn update(&self, id: Uuid, data: &InstructorInput) -> AppResult<Option<Instructor>> {
        let mut tx = self.begin().await?;

        let updated = sqlx::query_as::<_, Instructor>(
            "UPDATE instructors \
             SET first_name = $2, last_name = $3, email = $4, hire_date = $5, \
                 department_id = $6, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.hire_date)
        .bind(data.department_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update instructor"))?;

        let Some(instructor) = updated else {
            return Ok(None);
        };

        replace_office(&mut tx, instructor.id, data.office_location.as_deref()).await?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to commit instructor"))?;
        Ok(Some(instructor))
    }

    /// Delete an instructor with its office and course assignments, clearing
    /// any department it administers.
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteReport> {
        delete_with_policy(&self.pool, &INSTRUCTOR_POLICY, id).await
    }

    /// Courses the instructor teaches, ordered by title.
    pub async fn assigned_courses(&self, instructor_id: Uuid) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(
            "SELECT c.* FROM courses c \
             JOIN course_instructors ci ON ci.course_id = c.id \
             WHERE ci.instructor_id = $1 \
             ORDER BY c.title ASC, c.id ASC",
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list assigned courses"))
    }

    /// Courses the instructor does not teach yet, ordered by title.
    pub async fn available_courses(&self, instructor_id: Uuid) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(
            "SELECT c.* FROM courses c \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM course_instructors ci \
                 WHERE ci.course_id = c.id AND ci.instructor_id = $1 \
             ) \
             ORDER BY c.title ASC, c.id ASC",
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list available courses"))
    }

    /// Add a course assignment. A duplicate is reported as a conflict.
    pub async fn assign_course(
        &self,
        instructor_id: Uuid,
        course_id: Uuid,
    ) -> AppResult<CourseAssignment> {
        sqlx::query_as::<_, CourseAssignment>(
            "INSERT INTO course_instructors (course_id, instructor_id) \
             VALUES ($1, $2) \
             RETURNING course_id, instructor_id",
        )
        .bind(course_id)
        .bind(instructor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to assign course"))
    }

    /// Remove a course assignment. Returns whether a row was removed.
    pub async fn remove_course(&self, instructor_id: Uuid, course_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM course_instructors WHERE course_id = $1 AND instructor_id = $2",
        )
        .bind(course_id)
        .bind(instructor_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to remove course assignment"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to begin transaction"))
    }
}

/// Upsert the office row when a location is given, otherwise remove it.
async fn replace_office(
    tx: &mut Transaction<'static, Postgres>,
    instructor_id: Uuid,
    location: Option<&str>,
) -> AppResult<()> {
    match location {
        Some(location) => {
            sqlx::query(
                "INSERT INTO office_assignments (instructor_id, location) VALUES ($1, $2) \
                 ON CONFLICT (instructor_id) DO UPDATE SET location = EXCLUDED.location",
            )
            .bind(instructor_id)
            .bind(location)
            .execute(&mut **tx)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to save office assignment"))?;
        }
        None => {
            sqlx::query("DELETE FROM office_assignments WHERE instructor_id = $1")
                .bind(instructor_id)
                .execute(&mut **tx)
                .await
                .map_err(|e| map_sqlx_error(e, "Failed to remove office assignment"))?;
        }
    }
    Ok(())
}
