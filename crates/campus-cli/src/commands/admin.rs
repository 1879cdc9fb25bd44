//! Administrator account commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::DatabasePool;
use campus_database::repositories::UserRepository;
use campus_entity::student::StudentProfile;
use campus_service::AccountProvisioner;

use super::input_error;
use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new administrator account
    Create {
        /// First name
        #[arg(long)]
        first_name: Option<String>,
        /// Last name
        #[arg(long)]
        last_name: Option<String>,
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig, db: &DatabasePool) -> Result<(), AppError> {
    let accounts = AccountProvisioner::new(
        Arc::new(UserRepository::new(db.pool().clone())),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
    );

    match &args.command {
        AdminCommand::Create {
            first_name,
            last_name,
            email,
            password,
        } => {
            let first_name = prompt_or(first_name, "First name")?;
            let last_name = prompt_or(last_name, "Last name")?;
            let email = prompt_or(email, "Email")?;

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(input_error)?,
            };

            let profile = StudentProfile {
                first_name,
                last_name,
                email,
                enrollment_date: None,
                department_id: None,
                phone_number: None,
                address: None,
                date_of_birth: None,
            };

            let user = accounts.create_admin(&profile, &password).await?;
            output::print_success(&format!(
                "Admin '{}' created (id: {})",
                user.email, user.id
            ));
        }
    }

    Ok(())
}

fn prompt_or(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(input_error),
    }
}
