//! Infrastructure layer
//!
//! - `database`: SeaORM entities, migrations and repositories
//! - `storage`: in-memory repositories for development and tests

pub mod database;
pub mod storage;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, DatabaseConfig};
pub use storage::InMemoryRepositoryProvider;
