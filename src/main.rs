//! Northwind Employees command-line caller
//!
//! Runs one employee-service operation per invocation and prints the
//! result as JSON on stdout.
//!
//! ```sh
//! # Run with default config (~/.config/northwind-employees/config.toml)
//! northwind-employees list
//!
//! # Walk the hierarchy
//! northwind-employees superior 2
//! northwind-employees subordinates 2
//!
//! # Mutations take JSON
//! northwind-employees create '{"first_name":"Nancy","last_name":"Davolio","reports_to":2}'
//! northwind-employees update 1 '{"first_name":"Nancy","last_name":"Davolio","title":"Sales Representative"}'
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use serde::Serialize;
use tracing::{error, info};

use northwind_employees::config::LoggingSettings;
use northwind_employees::infrastructure::database::migrator::Migrator;
use northwind_employees::logging::init_tracing;
use northwind_employees::shared::AppError;
use northwind_employees::{
    default_config_path, init_database, AppConfig, DatabaseConfig, DomainError, Employee,
    EmployeeService, SeaOrmRepositoryProvider,
};

/// Northwind employee records: hierarchy, orders, territories and CRUD.
#[derive(Parser, Debug)]
#[command(name = "northwind-employees", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "NORTHWIND_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Skip database migrations on startup.
    #[arg(long)]
    skip_migrations: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all employees
    List,
    /// Show one employee
    Get { id: i32 },
    /// Show the employee's superior
    Superior { id: i32 },
    /// List employees reporting to the given id
    Subordinates { id: i32 },
    /// List orders handled by the employee
    Orders { id: i32 },
    /// List territories assigned to the employee
    Territories { id: i32 },
    /// Create an employee from JSON
    Create { json: String },
    /// Replace the employee's fields with JSON
    Update { id: i32, json: String },
    /// Delete an employee and print the removed record
    Delete { id: i32 },
    /// Validate the configuration and exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    // A file that exists but does not parse is fatal; only a missing file
    // falls back to defaults.
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match load_config(&config_path, cli.log_level.as_deref()) {
        Ok(cfg) => {
            init_tracing(&cfg.logging);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load config from {}: {}", config_path.display(), e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config, config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load `path` and apply the `--log-level` override.
fn load_config(path: &Path, log_level: Option<&str>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load(path)?;
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
    Ok(config)
}

async fn run(cli: Cli, config: AppConfig, config_path: PathBuf) -> Result<(), AppError> {
    if let Command::CheckConfig = cli.command {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Database ───────────────────────────────────────────────
    let db = init_database(&DatabaseConfig::from(&config.database)).await?;
    if !cli.skip_migrations {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations completed");
    }

    let service = EmployeeService::new(Arc::new(SeaOrmRepositoryProvider::new(db.clone())));
    let result = dispatch(&service, cli.command).await;

    if let Err(e) = db.close().await {
        tracing::warn!("Error closing database connection: {}", e);
    }
    result
}

async fn dispatch(service: &EmployeeService, command: Command) -> Result<(), AppError> {
    match command {
        Command::List => print_json(&service.get_all().await?),
        Command::Get { id } => {
            let employee = service
                .get_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found("Employee", "id", id))?;
            print_json(&employee)
        }
        Command::Superior { id } => print_json(&service.get_superior_by_id(id).await?),
        Command::Subordinates { id } => print_json(&service.get_subordinates_by_id(id).await?),
        Command::Orders { id } => print_json(&service.get_orders_by_employee_id(id).await?),
        Command::Territories { id } => {
            print_json(&service.get_territories_by_employee_id(id).await?)
        }
        Command::Create { json } => {
            let candidate: Employee = serde_json::from_str(&json)?;
            print_json(&service.create(candidate).await?)
        }
        Command::Update { id, json } => {
            let mut candidate: Employee = serde_json::from_str(&json)?;
            candidate.id = id;
            print_json(&service.update(candidate).await?)
        }
        Command::Delete { id } => print_json(&service.delete(id).await?),
        Command::CheckConfig => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "northwind-employees-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_documented_flags_and_subcommands() {
        let cli = Cli::try_parse_from(["northwind-employees", "--skip-migrations", "check-config"])
            .unwrap();
        assert!(cli.skip_migrations);
        assert!(matches!(cli.command, Command::CheckConfig));

        let cli = Cli::try_parse_from(["northwind-employees", "superior", "2"]).unwrap();
        assert!(!cli.skip_migrations);
        assert!(matches!(cli.command, Command::Superior { id: 2 }));

        assert!(Cli::try_parse_from(["northwind-employees", "check"]).is_err());
        assert!(Cli::try_parse_from(["northwind-employees", "--no-migrate", "list"]).is_err());
    }

    #[test]
    fn malformed_config_is_an_error_not_defaults() {
        let path = temp_config("malformed", "[database\nurl = ");
        let result = load_config(&path, None);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn log_level_override_is_applied() {
        let path = temp_config("level", "[logging]\nlevel = \"warn\"\n");
        let config = load_config(&path, Some("debug")).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let path = std::env::temp_dir().join("northwind-employees-does-not-exist.toml");
        let config = load_config(&path, None).unwrap();
        assert_eq!(config.logging, LoggingSettings::default());
    }
}
