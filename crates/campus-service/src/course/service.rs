//! Course CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use campus_auth::rbac::{Permission, RbacEnforcer};
use campus_core::error::AppError;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::CourseRepository;
use campus_entity::course::{Course, CourseDetail, CourseInput};
use campus_entity::validate_input;

use crate::context::RequestContext;

/// Handles course operations.
#[derive(Debug, Clone)]
pub struct CourseService {
    repo: Arc<CourseRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(repo: Arc<CourseRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { repo, rbac }
    }

    /// Lists courses with department names.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<CourseDetail>, AppError> {
        self.rbac.require_permission(ctx.role, Permission::CourseRead)?;
        self.repo.find_all(page).await
    }

    /// Gets one course projection.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<CourseDetail, AppError> {
        self.rbac.require_permission(ctx.role, Permission::CourseRead)?;
        self.repo
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))
    }

    /// Creates a course. An unknown department is reported as not found.
    pub async fn create(&self, ctx: &RequestContext, input: CourseInput) -> Result<Course, AppError> {
        self.rbac.require_permission(ctx.role, Permission::CourseManage)?;
        validate_input(&input)?;

        let course = self.repo.create(&input).await?;
        info!(course_id = %course.id, title = %course.title, actor = %ctx.user_id, "Course created");
        Ok(course)
    }

    /// Replaces a course's fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: CourseInput,
    ) -> Result<Course, AppError> {
        self.rbac.require_permission(ctx.role, Permission::CourseManage)?;
        validate_input(&input)?;

        let course = self
            .repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;
        info!(course_id = %id, actor = %ctx.user_id, "Course updated");
        Ok(course)
    }

    /// Deletes a course with its enrollments and instructor assignments.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac.require_permission(ctx.role, Permission::CourseManage)?;
        let report = self.repo.delete(id).await?;
        info!(course_id = %id, cascaded = report.cascaded, actor = %ctx.user_id, "Course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use campus_core::error::ErrorKind;

    use super::*;
    use crate::test_support::{admin, lazy_pool, rbac, student};

    fn service() -> CourseService {
        CourseService::new(Arc::new(CourseRepository::new(lazy_pool())), rbac())
    }

    fn input(credits: i32) -> CourseInput {
        CourseInput {
            title: "Algorithms".to_string(),
            credits,
            department_id: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn test_student_cannot_update() {
        let err = service()
            .update(&student(), Uuid::new_v4(), input(4))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn test_credits_out_of_range() {
        let err = service().create(&admin(), input(12)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.field.as_deref(), Some("credits"));
    }
}
