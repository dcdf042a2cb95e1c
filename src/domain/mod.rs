//! Domain layer
//!
//! Aggregates (`employee`, `order`, `territory`) with their repository
//! interfaces, plus the `RepositoryProvider` that bundles them.

pub mod employee;
pub mod order;
pub mod repositories;
pub mod territory;

pub use employee::{Employee, EmployeeRepository};
pub use order::{Order, OrderRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use territory::{EmployeeTerritory, Territory, TerritoryRepository};

pub use crate::shared::errors::DomainError;
