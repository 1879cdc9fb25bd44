//! Integration tests for student records and self-service access.

mod helpers;

use http::StatusCode;
use serde_json::json;

use campus_entity::student::UserRole;
use helpers::{TEST_PASSWORD, TestApp, unique_email};

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_admin_creates_and_lists_students() {
    let app = TestApp::new().await;
    let token = app.admin_token();
    let email = unique_email("alexander");

    let created = app
        .request(
            "POST",
            "/api/student",
            Some(json!({
                "first_name": "Carson",
                "last_name": "Alexander",
                "email": email,
                "enrollment_date": "2019-09-01",
                "password": TEST_PASSWORD,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["enrollment_date"], "2019-09-01");
    assert!(created.data().get("password_hash").is_none());

    let listed = app
        .request("GET", "/api/student?per_page=100", None, Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert!(listed.data()["total_items"].as_u64().unwrap() >= 1);
    assert!(listed.data()["items"].as_array().unwrap().len() <= 100);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_student_reads_and_updates_self() {
    let app = TestApp::new().await;
    let student = app.create_user(UserRole::Student, Some(TEST_PASSWORD)).await;
    let token = app.token_for(&student);
    let path = format!("/api/student/{}", student.id);

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::OK);

    let updated = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "first_name": "Meredith",
                "last_name": "Alonso",
                "email": student.email,
                "phone_number": "555-0100",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["first_name"], "Meredith");
    assert_eq!(updated.data()["role"], "student");
    assert_eq!(
        updated.data()["enrollment_date"],
        fetched.data()["enrollment_date"]
    );
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_student_cannot_list_or_delete() {
    let app = TestApp::new().await;
    let student = app.create_user(UserRole::Student, None).await;
    let token = app.token_for(&student);

    let listed = app.request("GET", "/api/student", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::FORBIDDEN);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/student/{}", student.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_admin_account_is_not_a_student() {
    let app = TestApp::new().await;
    let admin = app.create_user(UserRole::Admin, None).await;
    let token = app.admin_token();

    let response = app
        .request(
            "GET",
            &format!("/api/student/{}", admin.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
