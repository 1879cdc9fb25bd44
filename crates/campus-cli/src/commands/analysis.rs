//! Dashboard aggregates command.

use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_database::DatabasePool;
use campus_database::repositories::AnalysisRepository;

use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct DepartmentRow {
    department: String,
    enrollments: i64,
}

/// Print totals, the average grade and per-department enrollment counts.
pub async fn execute(db: &DatabasePool, format: OutputFormat) -> Result<(), AppError> {
    let summary = AnalysisRepository::new(db.pool().clone()).summary().await?;

    if format == OutputFormat::Json {
        println!("{}", output::render_json(&summary));
        return Ok(());
    }

    let average = summary
        .average_grade
        .map(|g| format!("{g:.1}"))
        .unwrap_or_else(|| "-".to_string());
    println!("Totals:");
    println!(
        "{}",
        output::render_totals(&[
            ("Departments", summary.department_count.to_string()),
            ("Courses", summary.course_count.to_string()),
            ("Instructors", summary.instructor_count.to_string()),
            ("Students", summary.student_count.to_string()),
            ("Enrollments", summary.enrollment_count.to_string()),
            ("Average grade", average),
        ])
    );
    println!();

    let rows: Vec<DepartmentRow> = summary
        .by_department
        .iter()
        .map(|d| DepartmentRow {
            department: d.department_name.clone(),
            enrollments: d.enrollment_count,
        })
        .collect();
    output::print_list(&rows, format);

    Ok(())
}
