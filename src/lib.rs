//! # Northwind Employees
//!
//! Employee domain service for the Northwind data set: employee lookup,
//! management hierarchy, order and territory assignments, and CRUD.
//!
//! ## Architecture
//!
//! - **domain**: Entities and repository traits
//! - **application**: `EmployeeService`, the use-case layer
//! - **infrastructure**: SeaORM persistence and in-memory storage
//! - **shared**: Error types
//! - **config**: TOML configuration
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use northwind_employees::{init_database, DatabaseConfig, EmployeeService, SeaOrmRepositoryProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let db = init_database(&DatabaseConfig::default()).await?;
//! let service = EmployeeService::new(Arc::new(SeaOrmRepositoryProvider::new(db)));
//! let superior = service.get_superior_by_id(2).await?;
//! println!("{}", superior.full_name());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::EmployeeService;
pub use domain::{DomainError, DomainResult, Employee, Order, RepositoryProvider, Territory};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider};
