//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod employee_repository;
pub mod order_repository;
pub mod repository_provider;
pub mod territory_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
