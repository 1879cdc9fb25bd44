//! Integration tests for courses.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use campus_entity::student::UserRole;
use helpers::TestApp;

async fn create_department(app: &TestApp, token: &str) -> String {
    app.request(
        "POST",
        "/api/department",
        Some(json!({ "name": "Engineering", "budget": 350000.0, "start_date": "2007-09-01" })),
        Some(token),
    )
    .await
    .id()
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_create_update_and_fetch_course() {
    let app = TestApp::new().await;
    let token = app.admin_token();
    let department_id = create_department(&app, &token).await;

    let created = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "title": "Chemistry", "credits": 3, "department_id": department_id })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.id();

    let updated = app
        .request(
            "PUT",
            &format!("/api/courses/{id}"),
            Some(json!({ "title": "Organic Chemistry", "credits": 4, "department_id": department_id })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let student_token = app.student_token();
    let fetched = app
        .request("GET", &format!("/api/courses/{id}"), None, Some(&student_token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "Organic Chemistry");
    assert_eq!(fetched.data()["credits"], 4);
    assert_eq!(fetched.data()["department_name"], "Engineering");
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_unknown_department_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "title": "Orphan", "credits": 1, "department_id": Uuid::new_v4() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_field(), Some("department_id"));
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_delete_cascades_enrollments() {
    let app = TestApp::new().await;
    let token = app.admin_token();
    let department_id = create_department(&app, &token).await;
    let course_id = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "title": "Calculus", "credits": 4, "department_id": department_id })),
            Some(&token),
        )
        .await
        .id();

    let student = app.create_user(UserRole::Student, None).await;
    let enrollment_id = app
        .request(
            "POST",
            "/api/enrollment",
            Some(json!({ "student_id": student.id, "course_id": course_id })),
            Some(&token),
        )
        .await
        .id();

    let deleted = app
        .request("DELETE", &format!("/api/courses/{course_id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let enrollment = app
        .request(
            "GET",
            &format!("/api/enrollment/{enrollment_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(enrollment.status, StatusCode::NOT_FOUND);
}
