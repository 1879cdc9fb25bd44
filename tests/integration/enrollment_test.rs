//! Integration tests for enrollments, including the end-to-end detail
//! projection.

mod helpers;

use http::StatusCode;
use serde_json::json;

use campus_entity::student::{User, UserRole};
use helpers::TestApp;

struct Fixture {
    app: TestApp,
    token: String,
    department_id: String,
    course_id: String,
    student: User,
}

async fn setup() -> Fixture {
    let app = TestApp::new().await;
    let token = app.admin_token();

    let department = app
        .request(
            "POST",
            "/api/department",
            Some(json!({ "name": "CS", "budget": 100000.0, "start_date": "2007-09-01" })),
            Some(&token),
        )
        .await;
    assert_eq!(department.status, StatusCode::CREATED);
    let department_id = department.id();

    let course_id = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "title": "Algorithms", "credits": 4, "department_id": department_id })),
            Some(&token),
        )
        .await
        .id();

    let student = app.create_user(UserRole::Student, None).await;

    Fixture {
        app,
        token,
        department_id,
        course_id,
        student,
    }
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_enrollment_detail_shows_course_and_department() {
    let f = setup().await;

    let created = f
        .app
        .request(
            "POST",
            "/api/enrollment",
            Some(json!({ "student_id": f.student.id, "course_id": f.course_id, "grade": 92 })),
            Some(&f.token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.id();

    let detail = f
        .app
        .request("GET", &format!("/api/enrollment/{id}"), None, Some(&f.token))
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.data()["course_title"], "Algorithms");
    assert_eq!(detail.data()["department_name"], "CS");
    assert_eq!(detail.data()["department_id"], f.department_id.as_str());
    assert_eq!(detail.data()["student_name"], f.student.full_name());
    assert_eq!(detail.data()["grade"], 92);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_second_enrollment_is_conflict() {
    let f = setup().await;
    let body = json!({ "student_id": f.student.id, "course_id": f.course_id });

    let first = f
        .app
        .request("POST", "/api/enrollment", Some(body.clone()), Some(&f.token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = f
        .app
        .request("POST", "/api/enrollment", Some(body), Some(&f.token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_field(), Some("course_id"));
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_grade_out_of_range_is_validation_error() {
    let f = setup().await;

    let response = f
        .app
        .request(
            "POST",
            "/api/enrollment",
            Some(json!({ "student_id": f.student.id, "course_id": f.course_id, "grade": 101 })),
            Some(&f.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_field(), Some("grade"));
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_student_sees_only_own_enrollments() {
    let f = setup().await;
    let other = f.app.create_user(UserRole::Student, None).await;

    for student_id in [f.student.id, other.id] {
        let response = f
            .app
            .request(
                "POST",
                "/api/enrollment",
                Some(json!({ "student_id": student_id, "course_id": f.course_id })),
                Some(&f.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let token = f.app.token_for(&f.student);
    let listed = f
        .app
        .request(
            "GET",
            &format!("/api/enrollment?course_id={}", f.course_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);

    let items = listed.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["student_id"], f.student.id.to_string().as_str());

    let all = f
        .app
        .request(
            "GET",
            &format!("/api/enrollment?course_id={}", f.course_id),
            None,
            Some(&f.token),
        )
        .await;
    assert_eq!(all.data()["total_items"], 2);
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn test_admin_cannot_be_enrolled() {
    let f = setup().await;
    let admin = f.app.create_user(UserRole::Admin, None).await;

    let response = f
        .app
        .request(
            "POST",
            "/api/enrollment",
            Some(json!({ "student_id": admin.id, "course_id": f.course_id })),
            Some(&f.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_field(), Some("student_id"));
}
