//! Credential check and token issuance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use campus_auth::jwt::{IssuedToken, JwtEncoder};
use campus_auth::password::PasswordHasher;
use campus_core::error::AppError;
use campus_database::repositories::UserRepository;
use campus_entity::student::{StudentProfile, User, UserRole};

use super::provisioner::AccountProvisioner;
use crate::context::RequestContext;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Self-service registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Profile fields.
    #[serde(flatten)]
    pub profile: StudentProfile,
    /// Chosen password.
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Successful login result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Issued access token.
    #[serde(flatten)]
    pub token: IssuedToken,
    /// The authenticated account.
    pub user: User,
}

/// Handles account lifecycle and authentication.
#[derive(Debug, Clone)]
pub struct AccountService {
    provisioner: Arc<AccountProvisioner>,
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        provisioner: Arc<AccountProvisioner>,
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            provisioner,
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a student account.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        self.provisioner
            .create(&req.profile, &req.password, UserRole::Student)
            .await
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails, password-less accounts and wrong passwords all
    /// produce the same authentication error.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let Some(user) = self.user_repo.find_by_email(&req.email).await? else {
            warn!(email = %req.email, "Login failed: unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        let Some(hash) = user.password_hash.as_deref() else {
            warn!(user_id = %user.id, "Login failed: account has no password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(&req.password, hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(user.id, user.role, &user.email)?;
        info!(user_id = %user.id, role = %user.role, "Login successful");
        Ok(LoginResponse { token, user })
    }

    /// Returns the caller's own account.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))
    }
}
