//! Department CRUD with the restrict / set-null delete policy.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use campus_auth::rbac::{Permission, RbacEnforcer};
use campus_core::error::AppError;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::DepartmentRepository;
use campus_entity::department::{Department, DepartmentDetail, DepartmentInput};
use campus_entity::validate_input;

use crate::context::RequestContext;

/// Handles department operations.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    repo: Arc<DepartmentRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(repo: Arc<DepartmentRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { repo, rbac }
    }

    /// Lists departments with administrator names and dependent counts.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<DepartmentDetail>, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::DepartmentRead)?;
        self.repo.find_all(page).await
    }

    /// Gets one department projection.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<DepartmentDetail, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::DepartmentRead)?;
        self.repo
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))
    }

    /// Creates a department.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: DepartmentInput,
    ) -> Result<Department, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::DepartmentManage)?;
        validate_input(&input)?;

        let department = self.repo.create(&input).await?;
        info!(
            department_id = %department.id,
            name = %department.name,
            actor = %ctx.user_id,
            "Department created"
        );
        Ok(department)
    }

    /// Replaces a department's fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: DepartmentInput,
    ) -> Result<Department, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::DepartmentManage)?;
        validate_input(&input)?;

        let department = self
            .repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;
        info!(department_id = %id, actor = %ctx.user_id, "Department updated");
        Ok(department)
    }

    /// Deletes a department. Fails with a conflict while courses reference
    /// it; member instructors and students lose their department.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::DepartmentManage)?;
        let report = self.repo.delete(id).await?;
        info!(
            department_id = %id,
            detached = report.nulled,
            actor = %ctx.user_id,
            "Department deleted"
        );
        Ok(())
    }
}
