//! Dashboard handler.

use axum::extract::State;

use campus_entity::analysis::AnalysisSummary;

use super::{ApiResult, ok};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/analysis
pub async fn summary(State(state): State<AppState>, auth: AuthUser) -> ApiResult<AnalysisSummary> {
    ok(state.analysis_service.summary(&auth).await?)
}
