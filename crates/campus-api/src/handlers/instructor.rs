//! Instructor and course assignment handlers.

use axum::extract::{Path, State};

use campus_core::types::pagination::PageResponse;
use campus_entity::course::Course;
use campus_entity::instructor::{
    CourseAssignment, CourseAssignmentInput, Instructor, InstructorDetail, InstructorInput,
};

use super::{ApiResult, CreatedResult, created, ok};
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, JsonBody, PaginationParams, QueryParams, parse_uuid};
use crate::state::AppState;

/// GET /api/instructor
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<PageResponse<InstructorDetail>> {
    let page = params.into_page_request();
    ok(state.instructor_service.list(&auth, &page).await?)
}

/// GET /api/instructor/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<InstructorDetail> {
    let id = parse_uuid(&id)?;
    ok(state.instructor_service.get(&auth, id).await?)
}

/// POST /api/instructor
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(input): JsonBody<InstructorInput>,
) -> CreatedResult<Instructor> {
    created(state.instructor_service.create(&auth, input).await?)
}

/// PUT /api/instructor/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<InstructorInput>,
) -> ApiResult<Instructor> {
    let id = parse_uuid(&id)?;
    ok(state.instructor_service.update(&auth, id, input).await?)
}

/// DELETE /api/instructor/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_uuid(&id)?;
    state.instructor_service.delete(&auth, id).await?;
    ok(MessageResponse::new("Instructor deleted"))
}

/// GET /api/instructor/{id}/courses
pub async fn assigned_courses(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Vec<Course>> {
    let id = parse_uuid(&id)?;
    ok(state.instructor_service.assigned_courses(&auth, id).await?)
}

/// GET /api/instructor/{id}/courses/available
pub async fn available_courses(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Vec<Course>> {
    let id = parse_uuid(&id)?;
    ok(state.instructor_service.available_courses(&auth, id).await?)
}

/// POST /api/instructor/{id}/courses
pub async fn assign_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CourseAssignmentInput>,
) -> CreatedResult<CourseAssignment> {
    let id = parse_uuid(&id)?;
    created(
        state
            .instructor_service
            .assign_course(&auth, id, input.course_id)
            .await?,
    )
}

/// DELETE /api/instructor/{id}/courses/{course_id}
pub async fn remove_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, course_id)): Path<(String, String)>,
) -> ApiResult<MessageResponse> {
    let id = parse_uuid(&id)?;
    let course_id = parse_uuid(&course_id)?;
    state
        .instructor_service
        .remove_course(&auth, id, course_id)
        .await?;
    ok(MessageResponse::new("Course assignment removed"))
}
