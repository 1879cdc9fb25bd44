//! Route definitions for the Campus Admin HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with every route and the request logger.
///
/// Outer layers (CORS, compression, tracing, timeout) are applied by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(department_routes())
        .merge(course_routes())
        .merge(instructor_routes())
        .merge(student_routes())
        .merge(enrollment_routes())
        .merge(analysis_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

fn department_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/department",
            get(handlers::department::list).post(handlers::department::create),
        )
        .route(
            "/department/{id}",
            get(handlers::department::get)
                .put(handlers::department::update)
                .delete(handlers::department::delete),
        )
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(handlers::course::list).post(handlers::course::create),
        )
        .route(
            "/courses/{id}",
            get(handlers::course::get)
                .put(handlers::course::update)
                .delete(handlers::course::delete),
        )
}

/// Instructor CRUD and course assignments
fn instructor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/instructor",
            get(handlers::instructor::list).post(handlers::instructor::create),
        )
        .route(
            "/instructor/{id}",
            get(handlers::instructor::get)
                .put(handlers::instructor::update)
                .delete(handlers::instructor::delete),
        )
        .route(
            "/instructor/{id}/courses",
            get(handlers::instructor::assigned_courses).post(handlers::instructor::assign_course),
        )
        .route(
            "/instructor/{id}/courses/available",
            get(handlers::instructor::available_courses),
        )
        .route(
            "/instructor/{id}/courses/{course_id}",
            axum::routing::delete(handlers::instructor::remove_course),
        )
}

fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/student",
            get(handlers::student::list).post(handlers::student::create),
        )
        .route(
            "/student/{id}",
            get(handlers::student::get)
                .put(handlers::student::update)
                .delete(handlers::student::delete),
        )
}

fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/enrollment",
            get(handlers::enrollment::list).post(handlers::enrollment::create),
        )
        .route(
            "/enrollment/{id}",
            get(handlers::enrollment::get)
                .put(handlers::enrollment::update)
                .delete(handlers::enrollment::delete),
        )
}

fn analysis_routes() -> Router<AppState> {
    Router::new().route("/analysis", get(handlers::analysis::summary))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
