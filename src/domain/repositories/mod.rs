//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::employee::EmployeeRepository;
use super::order::OrderRepository;
use super::territory::TerritoryRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let employee = repos.employees().find_by_id(5).await?;
///     let orders = repos.orders().find_by_employee_id(5).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn employees(&self) -> &dyn EmployeeRepository;
    fn orders(&self) -> &dyn OrderRepository;
    fn territories(&self) -> &dyn TerritoryRepository;
}
