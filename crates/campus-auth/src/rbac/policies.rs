//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use campus_entity::student::UserRole;

/// A system-level permission checked before any service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Read departments.
    DepartmentRead,
    /// Create, update and delete departments.
    DepartmentManage,
    /// Read courses.
    CourseRead,
    /// Create, update and delete courses.
    CourseManage,
    /// Read instructors and their course assignments.
    InstructorRead,
    /// Create, update and delete instructors and assignments.
    InstructorManage,
    /// Read any student record.
    StudentReadAll,
    /// Create, update and delete any student record.
    StudentManage,
    /// Read and update one's own profile.
    ProfileManage,
    /// Read one's own enrollments.
    EnrollmentReadOwn,
    /// Read every enrollment.
    EnrollmentReadAll,
    /// Create, update and delete enrollments.
    EnrollmentManage,
    /// View dashboard aggregates.
    AnalysisView,
}

/// Defines the mapping from each role to its set of allowed permissions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<UserRole, HashSet<Permission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        let student: HashSet<Permission> = [
            Permission::DepartmentRead,
            Permission::CourseRead,
            Permission::InstructorRead,
            Permission::ProfileManage,
            Permission::EnrollmentReadOwn,
        ]
        .into_iter()
        .collect();
        policies.insert(UserRole::Student, student);

        // Admin: everything
        let admin: HashSet<Permission> = [
            Permission::DepartmentRead,
            Permission::DepartmentManage,
            Permission::CourseRead,
            Permission::CourseManage,
            Permission::InstructorRead,
            Permission::InstructorManage,
            Permission::StudentReadAll,
            Permission::StudentManage,
            Permission::ProfileManage,
            Permission::EnrollmentReadOwn,
            Permission::EnrollmentReadAll,
            Permission::EnrollmentManage,
            Permission::AnalysisView,
        ]
        .into_iter()
        .collect();
        policies.insert(UserRole::Admin, admin);

        Self { policies }
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: UserRole) -> HashSet<Permission> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
