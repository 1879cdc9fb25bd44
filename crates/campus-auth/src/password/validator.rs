//! Password policy enforcement for new passwords.

use campus_core::config::AuthConfig;
use campus_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, reporting the first violated rule against
    /// the `password` field.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let rules: [(bool, String); 5] = [
            (
                password.chars().count() >= self.min_length,
                format!(
                    "Password must be at least {} characters long",
                    self.min_length
                ),
            ),
            (
                password.chars().any(char::is_uppercase),
                "Password must contain at least one uppercase letter".to_string(),
            ),
            (
                password.chars().any(char::is_lowercase),
                "Password must contain at least one lowercase letter".to_string(),
            ),
            (
                password.chars().any(|c| c.is_ascii_digit()),
                "Password must contain at least one digit".to_string(),
            ),
            (
                password.chars().any(|c| !c.is_alphanumeric()),
                "Password must contain at least one special character".to_string(),
            ),
        ];

        match rules.into_iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err(AppError::invalid_field("password", message)),
            None => Ok(()),
        }
    }
}
