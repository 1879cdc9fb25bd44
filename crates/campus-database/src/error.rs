//! Translation of sqlx errors into [`AppError`]s.
//!
//! Constraint violations are recognised by name so the caller learns which
//! payload field was at fault. Unknown constraints fall back to the
//! violation class.

use sqlx::error::ErrorKind as DbErrorKind;

use campus_core::error::{AppError, ErrorKind};

/// A named schema constraint and how its violation is reported.
struct ConstraintRule {
    name: &'static str,
    kind: ErrorKind,
    field: &'static str,
    message: &'static str,
}

const CONSTRAINTS: &[ConstraintRule] = &[
    ConstraintRule {
        name: "users_email_key",
        kind: ErrorKind::Conflict,
        field: "email",
        message: "A user with this email already exists",
    },
    ConstraintRule {
        name: "users_email_lower_key",
        kind: ErrorKind::Conflict,
        field: "email",
        message: "A user with this email already exists",
    },
    ConstraintRule {
        name: "instructors_email_key",
        kind: ErrorKind::Conflict,
        field: "email",
        message: "An instructor with this email already exists",
    },
    ConstraintRule {
        name: "instructors_email_lower_key",
        kind: ErrorKind::Conflict,
        field: "email",
        message: "An instructor with this email already exists",
    },
    ConstraintRule {
        name: "enrollments_student_id_course_id_key",
        kind: ErrorKind::Conflict,
        field: "course_id",
        message: "Student is already enrolled in this course",
    },
    ConstraintRule {
        name: "course_instructors_pkey",
        kind: ErrorKind::Conflict,
        field: "course_id",
        message: "Course is already assigned to this instructor",
    },
    ConstraintRule {
        name: "courses_department_id_fkey",
        kind: ErrorKind::NotFound,
        field: "department_id",
        message: "Department not found",
    },
    ConstraintRule {
        name: "instructors_department_id_fkey",
        kind: ErrorKind::NotFound,
        field: "department_id",
        message: "Department not found",
    },
    ConstraintRule {
        name: "users_department_id_fkey",
        kind: ErrorKind::NotFound,
        field: "department_id",
        message: "Department not found",
    },
    ConstraintRule {
        name: "departments_administrator_id_fkey",
        kind: ErrorKind::NotFound,
        field: "administrator_id",
        message: "Administrator instructor not found",
    },
    ConstraintRule {
        name: "enrollments_course_id_fkey",
        kind: ErrorKind::NotFound,
        field: "course_id",
        message: "Course not found",
    },
    ConstraintRule {
        name: "enrollments_student_id_fkey",
        kind: ErrorKind::NotFound,
        field: "student_id",
        message: "Student not found",
    },
    ConstraintRule {
        name: "course_instructors_course_id_fkey",
        kind: ErrorKind::NotFound,
        field: "course_id",
        message: "Course not found",
    },
    ConstraintRule {
        name: "course_instructors_instructor_id_fkey",
        kind: ErrorKind::NotFound,
        field: "instructor_id",
        message: "Instructor not found",
    },
    ConstraintRule {
        name: "office_assignments_instructor_id_fkey",
        kind: ErrorKind::NotFound,
        field: "instructor_id",
        message: "Instructor not found",
    },
    ConstraintRule {
        name: "departments_budget_check",
        kind: ErrorKind::Validation,
        field: "budget",
        message: "Budget must not be negative",
    },
    ConstraintRule {
        name: "courses_credits_check",
        kind: ErrorKind::Validation,
        field: "credits",
        message: "Credits must be between 0 and 10",
    },
    ConstraintRule {
        name: "enrollments_grade_check",
        kind: ErrorKind::Validation,
        field: "grade",
        message: "Grade must be between 0 and 100",
    },
];

/// Map a sqlx error to an application error.
///
/// `context` describes the failed operation and is only used for errors
/// that are not constraint violations.
pub fn map_sqlx_error(err: sqlx::Error, context: &str) -> AppError {
    let sqlx::Error::Database(db_err) = &err else {
        return AppError::with_source(ErrorKind::Database, context.to_string(), err);
    };

    if let Some(rule) = db_err
        .constraint()
        .and_then(|name| CONSTRAINTS.iter().find(|r| r.name == name))
    {
        return AppError::new(rule.kind, rule.message).for_field(rule.field);
    }

    match db_err.kind() {
        DbErrorKind::UniqueViolation => AppError::conflict("Resource already exists"),
        DbErrorKind::ForeignKeyViolation => AppError::not_found("Referenced resource not found"),
        DbErrorKind::CheckViolation | DbErrorKind::NotNullViolation => {
            AppError::validation("Value violates a schema constraint")
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}
