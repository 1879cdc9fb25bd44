//! Integration tests for registration, login and the current profile.
//!
//! Run with `CAMPUS_TEST_DATABASE_URL` pointing at a scratch database and
//! `cargo test -- --ignored`.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use campus_auth::jwt::JwtDecoder;
use campus_entity::student::UserRole;
use helpers::TEST_PASSWORD;

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_login_wrong_password_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user(UserRole::Student, Some(TEST_PASSWORD)).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": user.email, "password": "Wrong#pass1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.get("access_token").is_none());
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": helpers::unique_email("nobody"),
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_login_success_issues_decodable_token() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user(UserRole::Admin, Some(TEST_PASSWORD)).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": user.email, "password": TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["token_type"], "Bearer");
    assert!(response.data()["user"].get("password_hash").is_none());

    let token = response.data()["access_token"].as_str().unwrap();
    let claims = JwtDecoder::new(&app.config.auth).decode(token).unwrap();
    assert_eq!(claims.user_id(), user.id);
    assert_eq!(claims.role, UserRole::Admin);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_login_is_case_insensitive_on_email() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user(UserRole::Student, Some(TEST_PASSWORD)).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": user.email.to_uppercase(), "password": TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_passwordless_student_cannot_login() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user(UserRole::Student, None).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": user.email, "password": TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_register_then_me() {
    let app = helpers::TestApp::new().await;
    let email = helpers::unique_email("new");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": email,
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["role"], "student");

    let duplicate = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": email,
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.error_field(), Some("email"));

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": email, "password": TEST_PASSWORD })),
            None,
        )
        .await;
    let token = login.data()["access_token"].as_str().unwrap().to_string();

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.data()["email"], email.as_str());
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_me_for_deleted_account_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let token = app.token(Uuid::new_v4(), UserRole::Student);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_health_reports_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["database"], "connected");
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_register_email_differing_only_in_case_is_conflict() {
    let app = helpers::TestApp::new().await;
    let email = helpers::unique_email("casefold");

    let first = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "first_name": "Alice",
                "last_name": "Liddell",
                "email": email,
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "first_name": "Alice",
                "last_name": "Liddell",
                "email": email.to_uppercase(),
                "password": "Other#pass99",
            })),
            None,
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_field(), Some("email"));

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": email.to_uppercase(), "password": TEST_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}
