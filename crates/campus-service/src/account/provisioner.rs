//! Account creation shared by self-registration and the operator CLI.

use std::sync::Arc;

use tracing::info;

use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_core::error::AppError;
use campus_database::repositories::UserRepository;
use campus_entity::student::{StudentProfile, User, UserRole};
use campus_entity::validate_input;

/// Validates, hashes and stores new accounts. Issues no tokens.
#[derive(Debug, Clone)]
pub struct AccountProvisioner {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AccountProvisioner {
    /// Creates a new provisioner.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Creates an administrator account.
    pub async fn create_admin(
        &self,
        profile: &StudentProfile,
        password: &str,
    ) -> Result<User, AppError> {
        self.create(profile, password, UserRole::Admin).await
    }

    /// Creates an account with the given role after checking the profile
    /// and the password policy.
    pub async fn create(
        &self,
        profile: &StudentProfile,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        validate_input(profile)?;
        self.validator.validate(password)?;

        let hash = self.hasher.hash_password(password)?;
        let user = self.user_repo.create(profile, Some(&hash), role).await?;
        info!(user_id = %user.id, role = %role, "Account created");
        Ok(user)
    }
}
