//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{EmployeeRepository, OrderRepository, RepositoryProvider, TerritoryRepository};

use super::employee_repository::SeaOrmEmployeeRepository;
use super::order_repository::SeaOrmOrderRepository;
use super::territory_repository::SeaOrmTerritoryRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let employee = repos.employees().find_by_id(5).await?;
/// let territories = repos.territories().find_by_employee_id(5).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    employees: SeaOrmEmployeeRepository,
    orders: SeaOrmOrderRepository,
    territories: SeaOrmTerritoryRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employees: SeaOrmEmployeeRepository::new(db.clone()),
            orders: SeaOrmOrderRepository::new(db.clone()),
            territories: SeaOrmTerritoryRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn employees(&self) -> &dyn EmployeeRepository {
        &self.employees
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }

    fn territories(&self) -> &dyn TerritoryRepository {
        &self.territories
    }
}
