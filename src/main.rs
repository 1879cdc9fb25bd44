//! Campus Admin server.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::DatabasePool;
use campus_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay and variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("CAMPUS_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let overlay = std::env::var("CAMPUS_ENV")
        .ok()
        .map(|env| format!("config/{env}"));

    AppConfig::load(&config_path, overlay.as_deref())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Campus Admin v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        run_migrations(db.pool()).await?;
        tracing::info!("Database migrations complete");
    }

    campus_api::run_server(config, db).await
}
