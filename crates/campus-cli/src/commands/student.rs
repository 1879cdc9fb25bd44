//! Student listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use campus_database::DatabasePool;
use campus_database::repositories::UserRepository;
use campus_entity::student::UserRole;

use crate::output::{self, OutputFormat};

/// Arguments for student commands
#[derive(Debug, Args)]
pub struct StudentArgs {
    /// Student subcommand
    #[command(subcommand)]
    pub command: StudentCommand,
}

/// Student subcommands
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// List students
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u64,
    },
}

/// Student display row for table output
#[derive(Debug, Serialize, Tabled)]
struct StudentRow {
    id: String,
    name: String,
    email: String,
    enrolled: String,
    can_login: bool,
}

/// Execute student commands
pub async fn execute(
    args: &StudentArgs,
    db: &DatabasePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db.pool().clone());

    match &args.command {
        StudentCommand::List { page, per_page } => {
            let request = PageRequest::new(*page, *per_page);
            let students = user_repo.find_by_role(UserRole::Student, &request).await?;

            let rows: Vec<StudentRow> = students
                .items
                .iter()
                .map(|s| StudentRow {
                    id: s.id.to_string(),
                    name: s.full_name(),
                    email: s.email.clone(),
                    enrolled: s.enrollment_date.format("%Y-%m-%d").to_string(),
                    can_login: s.can_login(),
                })
                .collect();

            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} students)",
                    students.page, students.total_pages, students.total_items
                );
            }
        }
    }

    Ok(())
}
