//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::department::{Department, DepartmentDetail, DepartmentInput};

use crate::error::map_sqlx_error;
use crate::integrity::{DEPARTMENT_POLICY, DeleteReport, delete_with_policy};

const DETAIL_SELECT: &str = "SELECT d.id, d.name, d.budget, d.start_date, d.administrator_id, \
     a.first_name || ' ' || a.last_name AS administrator_name, \
     (SELECT COUNT(*) FROM courses c WHERE c.department_id = d.id) AS course_count, \
     (SELECT COUNT(*) FROM instructors i WHERE i.department_id = d.id) AS instructor_count, \
     (SELECT COUNT(*) FROM users u WHERE u.department_id = d.id AND u.role = 'student') AS student_count \
     FROM departments d \
     LEFT JOIN instructors a ON a.id = d.administrator_id";

/// Repository for department CRUD and projections.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a department by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find department"))
    }

    /// Find the enriched projection of a department.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<DepartmentDetail>> {
        sqlx::query_as::<_, DepartmentDetail>(&format!("{DETAIL_SELECT} WHERE d.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to load department detail"))
    }

    /// List department projections ordered by name.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<DepartmentDetail>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count departments"))?;

        let items = sqlx::query_as::<_, DepartmentDetail>(&format!(
            "{DETAIL_SELECT} ORDER BY d.name ASC, d.id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list departments"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Insert a new department.
    pub async fn create(&self, data: &DepartmentInput) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (id, name, budget, start_date, administrator_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(data.budget)
        .bind(data.start_date)
        .bind(data.administrator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create department"))
    }

    /// Replace a department's fields. Returns `None` when it does not exist.
    pub async fn update(&self, id: Uuid, data: &DepartmentInput) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments \
             SET name = $2, budget = $3, start_date = $4, administrator_id = $5, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.budget)
        .bind(data.start_date)
        .bind(data.administrator_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update department"))
    }

    /// Delete a department, refusing while courses reference it and
    /// clearing instructor and student memberships.
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteReport> {
        delete_with_policy(&self.pool, &DEPARTMENT_POLICY, id).await
    }
}
