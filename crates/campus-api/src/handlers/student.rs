//! Student handlers.

use axum::extract::{Path, State};

use campus_core::types::pagination::PageResponse;
use campus_entity::student::{StudentProfile, User};
use campus_service::CreateStudentRequest;

use super::{ApiResult, CreatedResult, created, ok};
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, JsonBody, PaginationParams, QueryParams, parse_uuid};
use crate::state::AppState;

/// GET /api/student
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<PageResponse<User>> {
    let page = params.into_page_request();
    ok(state.student_service.list(&auth, &page).await?)
}

/// GET /api/student/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<User> {
    let id = parse_uuid(&id)?;
    ok(state.student_service.get(&auth, id).await?)
}

/// POST /api/student
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateStudentRequest>,
) -> CreatedResult<User> {
    created(state.student_service.create(&auth, req).await?)
}

/// PUT /api/student/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(profile): JsonBody<StudentProfile>,
) -> ApiResult<User> {
    let id = parse_uuid(&id)?;
    ok(state.student_service.update(&auth, id, profile).await?)
}

/// DELETE /api/student/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_uuid(&id)?;
    state.student_service.delete(&auth, id).await?;
    ok(MessageResponse::new("Student deleted"))
}
