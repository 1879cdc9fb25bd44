//! Instructor CRUD plus the course assignment set operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use campus_auth::rbac::{Permission, RbacEnforcer};
use campus_core::error::AppError;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::InstructorRepository;
use campus_entity::course::Course;
use campus_entity::instructor::{
    CourseAssignment, Instructor, InstructorDetail, InstructorInput,
};
use campus_entity::validate_input;

use crate::context::RequestContext;

/// Handles instructor operations.
#[derive(Debug, Clone)]
pub struct InstructorService {
    repo: Arc<InstructorRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl InstructorService {
    /// Creates a new instructor service.
    pub fn new(repo: Arc<InstructorRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { repo, rbac }
    }

    /// Lists instructors with department, office and course count.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<InstructorDetail>, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorRead)?;
        self.repo.find_all(page).await
    }

    /// Gets one instructor projection.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<InstructorDetail, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorRead)?;
        self.repo
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Instructor not found"))
    }

    /// Creates an instructor and its optional office.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: InstructorInput,
    ) -> Result<Instructor, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorManage)?;
        validate_input(&input)?;

        let instructor = self.repo.create(&input).await?;
        info!(instructor_id = %instructor.id, actor = %ctx.user_id, "Instructor created");
        Ok(instructor)
    }

    /// Replaces an instructor's fields and office.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: InstructorInput,
    ) -> Result<Instructor, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorManage)?;
        validate_input(&input)?;

        let instructor = self
            .repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Instructor not found"))?;
        info!(instructor_id = %id, actor = %ctx.user_id, "Instructor updated");
        Ok(instructor)
    }

    /// Deletes an instructor with its office and course assignments.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorManage)?;
        let report = self.repo.delete(id).await?;
        info!(
            instructor_id = %id,
            cascaded = report.cascaded,
            detached = report.nulled,
            actor = %ctx.user_id,
            "Instructor deleted"
        );
        Ok(())
    }

    /// Courses the instructor teaches.
    pub async fn assigned_courses(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorRead)?;
        self.ensure_exists(id).await?;
        self.repo.assigned_courses(id).await
    }

    /// Courses the instructor could still be assigned.
    pub async fn available_courses(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorRead)?;
        self.ensure_exists(id).await?;
        self.repo.available_courses(id).await
    }

    /// Assigns a course. Assigning twice is a conflict.
    pub async fn assign_course(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        course_id: Uuid,
    ) -> Result<CourseAssignment, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorManage)?;
        self.ensure_exists(id).await?;

        let assignment = self.repo.assign_course(id, course_id).await?;
        info!(instructor_id = %id, course_id = %course_id, actor = %ctx.user_id, "Course assigned");
        Ok(assignment)
    }

    /// Removes a course assignment.
    pub async fn remove_course(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        course_id: Uuid,
    ) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::InstructorManage)?;
        if !self.repo.remove_course(id, course_id).await? {
            return Err(AppError::not_found("Course assignment not found"));
        }
        info!(instructor_id = %id, course_id = %course_id, actor = %ctx.user_id, "Course unassigned");
        Ok(())
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<(), AppError> {
        match self.repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Instructor not found")),
        }
    }
}
