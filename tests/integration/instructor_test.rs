//! Integration tests for instructors, office assignments and course
//! assignments.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, unique_email};

struct Fixture {
    app: TestApp,
    token: String,
    instructor_id: String,
    course_id: String,
}

async fn setup() -> Fixture {
    let app = TestApp::new().await;
    let token = app.admin_token();

    let department_id = app
        .request(
            "POST",
            "/api/department",
            Some(json!({ "name": "Economics", "budget": 100000.0, "start_date": "2007-09-01" })),
            Some(&token),
        )
        .await
        .id();

    let course_id = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "title": "Microeconomics", "credits": 3, "department_id": department_id })),
            Some(&token),
        )
        .await
        .id();

    let instructor = app
        .request(
            "POST",
            "/api/instructor",
            Some(json!({
                "first_name": "Fadi",
                "last_name": "Fakhouri",
                "email": unique_email("fadi"),
                "hire_date": "2002-07-06",
                "department_id": department_id,
                "office_location": "Smith 17",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(instructor.status, StatusCode::CREATED, "{:?}", instructor.body);
    let instructor_id = instructor.id();

    Fixture {
        app,
        token,
        instructor_id,
        course_id,
    }
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_create_with_office_and_update_office() {
    let f = setup().await;
    let path = format!("/api/instructor/{}", f.instructor_id);

    let fetched = f.app.request("GET", &path, None, Some(&f.token)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["office_location"], "Smith 17");

    let updated = f
        .app
        .request(
            "PUT",
            &path,
            Some(json!({
                "first_name": "Fadi",
                "last_name": "Fakhouri",
                "email": unique_email("fadi"),
                "hire_date": "2002-07-06",
            })),
            Some(&f.token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let fetched = f.app.request("GET", &path, None, Some(&f.token)).await;
    assert!(fetched.data()["office_location"].is_null());
    assert!(fetched.data()["department_id"].is_null());
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_delete_removes_office_assignment() {
    let f = setup().await;
    let id: uuid::Uuid = f.instructor_id.parse().unwrap();

    let response = f
        .app
        .request(
            "DELETE",
            &format!("/api/instructor/{id}"),
            None,
            Some(&f.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let offices: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM office_assignments WHERE instructor_id = $1")
            .bind(id)
            .fetch_one(f.app.db.pool())
            .await
            .unwrap();
    assert_eq!(offices, 0);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_assign_duplicate_and_remove_course() {
    let f = setup().await;
    let courses_path = format!("/api/instructor/{}/courses", f.instructor_id);
    let body = json!({ "course_id": f.course_id });

    let available = f
        .app
        .request(
            "GET",
            &format!("{courses_path}/available"),
            None,
            Some(&f.token),
        )
        .await;
    assert!(
        available.data().as_array().unwrap().iter().any(|c| c["id"] == f.course_id.as_str())
    );

    let assigned = f
        .app
        .request("POST", &courses_path, Some(body.clone()), Some(&f.token))
        .await;
    assert_eq!(assigned.status, StatusCode::CREATED);

    let duplicate = f
        .app
        .request("POST", &courses_path, Some(body), Some(&f.token))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let listed = f.app.request("GET", &courses_path, None, Some(&f.token)).await;
    assert_eq!(listed.data().as_array().unwrap().len(), 1);

    let removed = f
        .app
        .request(
            "DELETE",
            &format!("{courses_path}/{}", f.course_id),
            None,
            Some(&f.token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);

    let removed_again = f
        .app
        .request(
            "DELETE",
            &format!("{courses_path}/{}", f.course_id),
            None,
            Some(&f.token),
        )
        .await;
    assert_eq!(removed_again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_duplicate_email_is_conflict() {
    let f = setup().await;
    let email = unique_email("dup");
    let body = json!({
        "first_name": "Roger",
        "last_name": "Zheng",
        "email": email,
        "hire_date": "2004-02-12",
    });

    let first = f
        .app
        .request("POST", "/api/instructor", Some(body.clone()), Some(&f.token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = f
        .app
        .request("POST", "/api/instructor", Some(body), Some(&f.token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_field(), Some("email"));
}
