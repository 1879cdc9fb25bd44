//! Integration tests for departments and their delete policy.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{TestApp, unique_email};

async fn create_department(app: &TestApp, token: &str, name: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/department",
            Some(json!({ "name": name, "budget": 100000.0, "start_date": "2007-09-01" })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.id()
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_create_then_fetch_returns_same_fields() {
    let app = TestApp::new().await;
    let token = app.admin_token();
    let id = create_department(&app, &token, "Mathematics").await;

    let response = app
        .request("GET", &format!("/api/department/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["name"], "Mathematics");
    assert_eq!(data["budget"], 100000.0);
    assert_eq!(data["start_date"], "2007-09-01");
    assert_eq!(data["course_count"], 0);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_missing_department_is_not_found() {
    let app = TestApp::new().await;
    let token = app.student_token();

    let path = format!("/api/department/{}", Uuid::new_v4());
    let response = app.request("GET", &path, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_unknown_administrator_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            "/api/department",
            Some(json!({
                "name": "Physics",
                "budget": 5.0,
                "start_date": "2001-01-01",
                "administrator_id": Uuid::new_v4(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_field(), Some("administrator_id"));
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_delete_with_courses_is_conflict_and_keeps_rows() {
    let app = TestApp::new().await;
    let token = app.admin_token();
    let department_id = create_department(&app, &token, "CS").await;

    let course = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "title": "Algorithms", "credits": 4, "department_id": department_id })),
            Some(&token),
        )
        .await;
    assert_eq!(course.status, StatusCode::CREATED);
    let course_id = course.id();

    let response = app
        .request(
            "DELETE",
            &format!("/api/department/{department_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let department = app
        .request(
            "GET",
            &format!("/api/department/{department_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(department.status, StatusCode::OK);

    let course = app
        .request("GET", &format!("/api/courses/{course_id}"), None, Some(&token))
        .await;
    assert_eq!(course.status, StatusCode::OK);
    assert_eq!(course.data()["department_id"], department_id.as_str());
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_delete_clears_instructor_and_student_department() {
    let app = TestApp::new().await;
    let token = app.admin_token();
    let department_id = create_department(&app, &token, "History").await;

    let instructor = app
        .request(
            "POST",
            "/api/instructor",
            Some(json!({
                "first_name": "Kim",
                "last_name": "Abercrombie",
                "email": unique_email("kim"),
                "hire_date": "1995-03-11",
                "department_id": department_id,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(instructor.status, StatusCode::CREATED);
    let instructor_id = instructor.id();

    let student = app
        .request(
            "POST",
            "/api/student",
            Some(json!({
                "first_name": "Carson",
                "last_name": "Alexander",
                "email": unique_email("carson"),
                "department_id": department_id,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(student.status, StatusCode::CREATED);
    let student_id = student.id();

    let response = app
        .request(
            "DELETE",
            &format!("/api/department/{department_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let instructor = app
        .request(
            "GET",
            &format!("/api/instructor/{instructor_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(instructor.status, StatusCode::OK);
    assert!(instructor.data()["department_id"].is_null());

    let student = app
        .request("GET", &format!("/api/student/{student_id}"), None, Some(&token))
        .await;
    assert_eq!(student.status, StatusCode::OK);
    assert!(student.data()["department_id"].is_null());
}
