//! Auth handlers: register, login, me.

use axum::extract::State;

use campus_entity::student::User;
use campus_service::{LoginRequest, LoginResponse, RegisterRequest};

use super::{ApiResult, CreatedResult, created, ok};
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> CreatedResult<User> {
    let user = state.account_service.register(req).await?;
    created(user)
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let result = state.account_service.login(req).await?;
    ok(result)
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<User> {
    let user = state.account_service.me(&auth).await?;
    ok(user)
}
