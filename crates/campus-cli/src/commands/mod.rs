//! CLI command definitions and dispatch.

pub mod admin;
pub mod analysis;
pub mod student;

use clap::{Parser, Subcommand};

use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::DatabasePool;

use crate::output::OutputFormat;

/// Campus Admin: university administration back end
#[derive(Debug, Parser)]
#[command(name = "campus", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay, loaded from `config/{env}`
    #[arg(short, long, env = "CAMPUS_ENV")]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Administrator account management
    Admin(admin::AdminArgs),
    /// Student listing
    Student(student::StudentArgs),
    /// Print dashboard aggregates
    Analysis,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        let db = DatabasePool::connect(&config.database).await?;

        let result = match &self.command {
            Commands::Admin(args) => admin::execute(args, &config, &db).await,
            Commands::Student(args) => student::execute(args, &db, self.format).await,
            Commands::Analysis => analysis::execute(&db, self.format).await,
        };

        db.close().await;
        result
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        let overlay = self.env.as_ref().map(|env| format!("config/{env}"));
        AppConfig::load(&self.config, overlay.as_deref())
    }
}

/// Map a dialoguer prompt failure to an application error.
pub(crate) fn input_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {err}"))
}
