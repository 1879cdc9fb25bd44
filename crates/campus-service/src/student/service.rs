//! Student CRUD. Admins manage every record; a student may read and
//! update their own profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_auth::rbac::{Permission, RbacEnforcer};
use campus_core::error::AppError;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::UserRepository;
use campus_entity::student::{StudentProfile, User, UserRole};
use campus_entity::validate_input;

use crate::context::RequestContext;

/// Request to create a student record.
///
/// Without a password the record exists for enrollment purposes but
/// cannot log in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    /// Profile fields.
    #[serde(flatten)]
    pub profile: StudentProfile,
    /// Initial password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Handles student operations.
#[derive(Debug, Clone)]
pub struct StudentService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    rbac: Arc<RbacEnforcer>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            rbac,
        }
    }

    /// Lists students ordered by name.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::StudentReadAll)?;
        self.user_repo.find_by_role(UserRole::Student, page).await
    }

    /// Gets a student; students may only read themselves.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<User, AppError> {
        self.require_access(ctx, id, Permission::StudentReadAll)?;
        self.find_student(id).await
    }

    /// Creates a student record.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateStudentRequest,
    ) -> Result<User, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::StudentManage)?;
        validate_input(&req.profile)?;

        let password_hash = match req.password.as_deref() {
            Some(password) => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let user = self
            .user_repo
            .create(&req.profile, password_hash.as_deref(), UserRole::Student)
            .await?;
        info!(student_id = %user.id, actor = %ctx.user_id, "Student created");
        Ok(user)
    }

    /// Replaces a student's profile; students may only update themselves.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        profile: StudentProfile,
    ) -> Result<User, AppError> {
        self.require_access(ctx, id, Permission::StudentManage)?;
        validate_input(&profile)?;
        self.find_student(id).await?;

        let user = self
            .user_repo
            .update_profile(id, &profile)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;
        info!(student_id = %id, actor = %ctx.user_id, "Student updated");
        Ok(user)
    }

    /// Deletes a student with their enrollments.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::StudentManage)?;
        self.find_student(id).await?;

        let report = self.user_repo.delete(id).await?;
        info!(student_id = %id, cascaded = report.cascaded, actor = %ctx.user_id, "Student deleted");
        Ok(())
    }

    fn require_access(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        permission: Permission,
    ) -> Result<(), AppError> {
        if ctx.is_self(id) {
            self.rbac
                .require_permission(ctx.role, Permission::ProfileManage)
        } else {
            self.rbac.require_permission(ctx.role, permission)
        }
    }

    async fn find_student(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .filter(|user| user.role == UserRole::Student)
            .ok_or_else(|| AppError::not_found("Student not found"))
    }
}
