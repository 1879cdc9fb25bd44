//! Request handlers grouped by resource.

use axum::Json;
use axum::http::StatusCode;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;

pub mod analysis;
pub mod auth;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod health;
pub mod instructor;
pub mod student;

/// Successful JSON response.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Successful JSON response with 201 Created.
pub type CreatedResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}

fn created<T: serde::Serialize>(data: T) -> CreatedResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}
