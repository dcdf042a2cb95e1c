//! Territory repository interface

use async_trait::async_trait;

use super::model::Territory;
use crate::domain::DomainResult;

#[async_trait]
pub trait TerritoryRepository: Send + Sync {
    /// Territories reachable through the employee's `EmployeeTerritory` rows
    async fn find_by_employee_id(&self, employee_id: i32) -> DomainResult<Vec<Territory>>;
}
