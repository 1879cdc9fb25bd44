//! Router-level tests for requests rejected before any query runs.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use campus_auth::jwt::{Claims, JwtEncoder};
use campus_entity::student::UserRole;

fn department_body(budget: f64) -> serde_json::Value {
    json!({
        "name": "Engineering",
        "budget": budget,
        "start_date": "2007-09-01",
    })
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app.request("GET", "/api/department", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = helpers::TestApp::lazy();

    let response = app
        .request("GET", "/api/courses", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = helpers::TestApp::lazy();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4(),
        role: UserRole::Admin,
        email: "late@campus.test".to_string(),
        iss: app.config.auth.jwt_issuer.clone(),
        iat: now - 7200,
        exp: now - 3600,
        jti: Uuid::new_v4(),
    };
    let token = JwtEncoder::new(&app.config.auth).encode(&claims).unwrap();

    let response = app
        .request("GET", "/api/department", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_student_cannot_create_department() {
    let app = helpers::TestApp::lazy();
    let token = app.student_token();

    let response = app
        .request("POST", "/api/department", Some(department_body(1000.0)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_student_cannot_view_analysis() {
    let app = helpers::TestApp::lazy();
    let token = app.student_token();

    let response = app.request("GET", "/api/analysis", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_cannot_read_other_student() {
    let app = helpers::TestApp::lazy();
    let token = app.student_token();

    let path = format!("/api/student/{}", Uuid::new_v4());
    let response = app.request("GET", &path, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_cannot_filter_other_enrollments() {
    let app = helpers::TestApp::lazy();
    let token = app.student_token();

    let path = format!("/api/enrollment?student_id={}", Uuid::new_v4());
    let response = app.request("GET", &path, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_negative_budget_is_validation_error() {
    let app = helpers::TestApp::lazy();
    let token = app.admin_token();

    let response = app
        .request("POST", "/api/department", Some(department_body(-5.0)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(response.error_field(), Some("budget"));
}

#[tokio::test]
async fn test_course_credits_out_of_range() {
    let app = helpers::TestApp::lazy();
    let token = app.admin_token();

    let body = json!({
        "title": "Algorithms",
        "credits": 11,
        "department_id": Uuid::new_v4(),
    });
    let response = app
        .request("POST", "/api/courses", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_field(), Some("credits"));
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = helpers::TestApp::lazy();
    let token = app.admin_token();

    let response = app
        .raw_request(
            "POST",
            "/api/department",
            "{\"name\": \"CS\",".to_string(),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let app = helpers::TestApp::lazy();
    let token = app.admin_token();

    let response = app
        .request("GET", "/api/department/42", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::lazy();

    let response = app.request("GET", "/api/nowhere", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_weak_registration_password_is_rejected() {
    let app = helpers::TestApp::lazy();

    let body = json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@campus.test",
        "password": "short",
    });
    let response = app
        .request("POST", "/api/auth/register", Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_field(), Some("password"));
}

#[tokio::test]
async fn test_overlong_registration_email_is_validation_error() {
    let app = helpers::TestApp::lazy();
    let domain = vec!["d".repeat(55); 4].join(".");

    let body = json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": format!("{}@{}.edu", "a".repeat(40), domain),
        "password": helpers::TEST_PASSWORD,
    });
    let response = app
        .request("POST", "/api/auth/register", Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_field(), Some("email"));
}

#[tokio::test]
async fn test_overlong_instructor_email_is_validation_error() {
    let app = helpers::TestApp::lazy();
    let token = app.admin_token();
    let domain = vec!["d".repeat(55); 4].join(".");

    let body = json!({
        "first_name": "Kim",
        "last_name": "Abercrombie",
        "email": format!("{}@{}.edu", "k".repeat(40), domain),
        "hire_date": "1995-03-11",
    });
    let response = app
        .request("POST", "/api/instructor", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_field(), Some("email"));
}
