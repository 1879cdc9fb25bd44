//! Department handlers.

use axum::extract::{Path, State};

use campus_core::types::pagination::PageResponse;
use campus_entity::department::{Department, DepartmentDetail, DepartmentInput};

use super::{ApiResult, CreatedResult, created, ok};
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, JsonBody, PaginationParams, QueryParams, parse_uuid};
use crate::state::AppState;

/// GET /api/department
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<PageResponse<DepartmentDetail>> {
    let page = params.into_page_request();
    ok(state.department_service.list(&auth, &page).await?)
}

/// GET /api/department/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<DepartmentDetail> {
    let id = parse_uuid(&id)?;
    ok(state.department_service.get(&auth, id).await?)
}

/// POST /api/department
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<DepartmentInput>,
) -> CreatedResult<Department> {
    created(state.department_service.create(&auth, input).await?)
}

/// PUT /api/department/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<DepartmentInput>,
) -> ApiResult<Department> {
    let id = parse_uuid(&id)?;
    ok(state.department_service.update(&auth, id, input).await?)
}

/// DELETE /api/department/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_uuid(&id)?;
    state.department_service.delete(&auth, id).await?;
    ok(MessageResponse::new("Department deleted"))
}
