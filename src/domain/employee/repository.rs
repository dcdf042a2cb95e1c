//! Employee repository interface

use async_trait::async_trait;

use super::model::Employee;
use crate::domain::DomainResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Employee>>;
    async fn find_all(&self) -> DomainResult<Vec<Employee>>;
    /// Employees whose `reports_to` equals `superior_id`
    async fn find_by_reports_to(&self, superior_id: i32) -> DomainResult<Vec<Employee>>;
    /// Insert with a store-assigned id; `employee.id` is ignored
    async fn insert(&self, employee: Employee) -> DomainResult<Employee>;
    /// Overwrite the row with `employee.id`. `None` if no such row.
    async fn update(&self, employee: Employee) -> DomainResult<Option<Employee>>;
    /// Remove the row and return it as it was before removal. `None` if no such row.
    async fn delete(&self, id: i32) -> DomainResult<Option<Employee>>;
}
