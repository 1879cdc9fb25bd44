//! Read-only dashboard summary.

use std::sync::Arc;

use campus_auth::rbac::{Permission, RbacEnforcer};
use campus_core::error::AppError;
use campus_database::repositories::AnalysisRepository;
use campus_entity::analysis::AnalysisSummary;

use crate::context::RequestContext;

/// Computes dashboard aggregates.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    repo: Arc<AnalysisRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl AnalysisService {
    /// Creates a new analysis service.
    pub fn new(repo: Arc<AnalysisRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { repo, rbac }
    }

    /// Totals per entity, average grade and per-department enrollments.
    pub async fn summary(&self, ctx: &RequestContext) -> Result<AnalysisSummary, AppError> {
        self.rbac.require_permission(ctx.role, Permission::AnalysisView)?;
        self.repo.summary().await
    }
}
