//! Course handlers.

use axum::extract::{Path, State};

use campus_core::types::pagination::PageResponse;
use campus_entity::course::{Course, CourseDetail, CourseInput};

use super::{ApiResult, CreatedResult, created, ok};
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, JsonBody, PaginationParams, QueryParams, parse_uuid};
use crate::state::AppState;

/// GET /api/courses
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<PageResponse<CourseDetail>> {
    let page = params.into_page_request();
    ok(state.course_service.list(&auth, &page).await?)
}

/// GET /api/courses/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<CourseDetail> {
    let id = parse_uuid(&id)?;
    ok(state.course_service.get(&auth, id).await?)
}

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<CourseInput>,
) -> CreatedResult<Course> {
    created(state.course_service.create(&auth, input).await?)
}

/// PUT /api/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CourseInput>,
) -> ApiResult<Course> {
    let id = parse_uuid(&id)?;
    ok(state.course_service.update(&auth, id, input).await?)
}

/// DELETE /api/courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_uuid(&id)?;
    state.course_service.delete(&auth, id).await?;
    ok(MessageResponse::new("Course deleted"))
}
