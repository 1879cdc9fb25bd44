//! Enrollment CRUD. Students see only their own enrollments.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use campus_auth::rbac::{Permission, RbacEnforcer};
use campus_core::error::AppError;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::{EnrollmentRepository, UserRepository};
use campus_entity::enrollment::{Enrollment, EnrollmentDetail, EnrollmentFilter, EnrollmentInput};
use campus_entity::student::UserRole;
use campus_entity::validate_input;

use crate::context::RequestContext;

/// Handles enrollment operations.
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    repo: Arc<EnrollmentRepository>,
    user_repo: Arc<UserRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl EnrollmentService {
    /// Creates a new enrollment service.
    pub fn new(
        repo: Arc<EnrollmentRepository>,
        user_repo: Arc<UserRepository>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            repo,
            user_repo,
            rbac,
        }
    }

    /// Lists enrollment projections. Callers without full read access are
    /// restricted to their own enrollments.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: EnrollmentFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<EnrollmentDetail>, AppError> {
        let filter = self.scope_filter(ctx, filter)?;
        self.repo.find_all(&filter, page).await
    }

    /// Gets one enrollment projection.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<EnrollmentDetail, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::EnrollmentReadOwn)?;

        let detail = self
            .repo
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Enrollment not found"))?;

        if !ctx.is_self(detail.student_id)
            && !self.rbac.has_permission(ctx.role, Permission::EnrollmentReadAll)
        {
            return Err(AppError::authorization(
                "Students may only view their own enrollments",
            ));
        }
        Ok(detail)
    }

    /// Enrolls a student in a course. A second enrollment for the same pair
    /// is a conflict.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: EnrollmentInput,
    ) -> Result<Enrollment, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::EnrollmentManage)?;
        validate_input(&input)?;
        self.ensure_student(input.student_id).await?;

        let enrollment = self.repo.create(&input).await?;
        info!(
            enrollment_id = %enrollment.id,
            student_id = %enrollment.student_id,
            course_id = %enrollment.course_id,
            actor = %ctx.user_id,
            "Enrollment created"
        );
        Ok(enrollment)
    }

    /// Replaces an enrollment, typically to record a grade.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: EnrollmentInput,
    ) -> Result<Enrollment, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::EnrollmentManage)?;
        validate_input(&input)?;
        self.ensure_student(input.student_id).await?;

        let enrollment = self
            .repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Enrollment not found"))?;
        info!(enrollment_id = %id, grade = ?enrollment.grade, actor = %ctx.user_id, "Enrollment updated");
        Ok(enrollment)
    }

    /// Deletes an enrollment.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::EnrollmentManage)?;
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Enrollment not found"));
        }
        info!(enrollment_id = %id, actor = %ctx.user_id, "Enrollment deleted");
        Ok(())
    }

    fn scope_filter(
        &self,
        ctx: &RequestContext,
        filter: EnrollmentFilter,
    ) -> Result<EnrollmentFilter, AppError> {
        if self.rbac.has_permission(ctx.role, Permission::EnrollmentReadAll) {
            return Ok(filter);
        }
        self.rbac
            .require_permission(ctx.role, Permission::EnrollmentReadOwn)?;

        match filter.student_id {
            Some(student_id) if !ctx.is_self(student_id) => Err(AppError::authorization(
                "Students may only view their own enrollments",
            )),
            _ => Ok(EnrollmentFilter {
                student_id: Some(ctx.user_id),
                course_id: filter.course_id,
            }),
        }
    }

    async fn ensure_student(&self, student_id: Uuid) -> Result<(), AppError> {
        match self.user_repo.find_by_id(student_id).await? {
            Some(user) if user.role == UserRole::Student => Ok(()),
            _ => Err(AppError::not_found("Student not found").for_field("student_id")),
        }
    }
}
