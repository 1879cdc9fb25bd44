//! Health check handler.

use axum::extract::State;

use campus_core::error::AppError;

use super::{ApiResult, ok};
use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> ApiResult<HealthResponse> {
    let reachable = state.db.health_check().await.unwrap_or(false);
    if !reachable {
        return Err(AppError::service_unavailable("Database is unreachable").into());
    }

    ok(HealthResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
