//! Aggregate queries for the admin dashboard.

use sqlx::{FromRow, PgPool};

use campus_core::result::AppResult;
use campus_entity::analysis::{AnalysisSummary, DepartmentEnrollmentCount};

use crate::error::map_sqlx_error;

#[derive(FromRow)]
struct Totals {
    department_count: i64,
    course_count: i64,
    instructor_count: i64,
    student_count: i64,
    enrollment_count: i64,
    average_grade: Option<f64>,
}

/// Repository for read-only dashboard aggregates.
#[derive(Debug, Clone)]
pub struct AnalysisRepository {
    pool: PgPool,
}

impl AnalysisRepository {
    /// Create a new analysis repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Compute entity totals, the average grade and per-department load.
    pub async fn summary(&self) -> AppResult<AnalysisSummary> {
        let totals = sqlx::query_as::<_, Totals>(
            "SELECT \
                 (SELECT COUNT(*) FROM departments) AS department_count, \
                 (SELECT COUNT(*) FROM courses) AS course_count, \
                 (SELECT COUNT(*) FROM instructors) AS instructor_count, \
                 (SELECT COUNT(*) FROM users WHERE role = 'student') AS student_count, \
                 (SELECT COUNT(*) FROM enrollments) AS enrollment_count, \
                 (SELECT AVG(grade)::float8 FROM enrollments) AS average_grade",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to compute totals"))?;

        let by_department = sqlx::query_as::<_, DepartmentEnrollmentCount>(
            "SELECT d.id AS department_id, d.name AS department_name, \
                    COUNT(e.id) AS enrollment_count \
             FROM departments d \
             LEFT JOIN courses c ON c.department_id = d.id \
             LEFT JOIN enrollments e ON e.course_id = c.id \
             GROUP BY d.id, d.name \
             ORDER BY enrollment_count DESC, d.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to compute department enrollments"))?;

        Ok(AnalysisSummary {
            department_count: totals.department_count,
            course_count: totals.course_count,
            instructor_count: totals.instructor_count,
            student_count: totals.student_count,
            enrollment_count: totals.enrollment_count,
            average_grade: totals.average_grade,
            by_department,
        })
    }
}
