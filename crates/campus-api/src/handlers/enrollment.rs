//! Enrollment handlers.

use axum::extract::{Path, State};

use campus_core::types::pagination::PageResponse;
use campus_entity::enrollment::{Enrollment, EnrollmentDetail, EnrollmentInput};

use super::{ApiResult, CreatedResult, created, ok};
use crate::dto::request::EnrollmentQuery;
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, JsonBody, QueryParams, parse_uuid};
use crate::state::AppState;

/// GET /api/enrollment
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<EnrollmentQuery>,
) -> ApiResult<PageResponse<EnrollmentDetail>> {
    let (filter, params) = query.into_parts();
    let page = params.into_page_request();
    ok(state.enrollment_service.list(&auth, filter, &page).await?)
}

/// GET /api/enrollment/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<EnrollmentDetail> {
    let id = parse_uuid(&id)?;
    ok(state.enrollment_service.get(&auth, id).await?)
}

/// POST /api/enrollment
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<EnrollmentInput>,
) -> CreatedResult<Enrollment> {
    created(state.enrollment_service.create(&auth, input).await?)
}

/// PUT /api/enrollment/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<EnrollmentInput>,
) -> ApiResult<Enrollment> {
    let id = parse_uuid(&id)?;
    ok(state.enrollment_service.update(&auth, id, input).await?)
}

/// DELETE /api/enrollment/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_uuid(&id)?;
    state.enrollment_service.delete(&auth, id).await?;
    ok(MessageResponse::new("Enrollment deleted"))
}
