//! RBAC enforcement logic.

use tracing::debug;

use campus_core::error::AppError;
use campus_entity::student::UserRole;

use super::policies::{Permission, RbacPolicies};

/// Enforces role-based access control for service operations.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Returns `Ok(())` if the role holds the permission, an authorization
    /// error otherwise.
    pub fn require_permission(&self, role: UserRole, permission: Permission) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            debug!(%role, ?permission, "Permission denied");
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{permission:?}'"
            )))
        }
    }

    /// Checks whether the role has the permission.
    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        self.policies.has_permission(role, permission)
    }
}
