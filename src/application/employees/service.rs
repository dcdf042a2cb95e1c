//! Employee domain service: application-layer orchestration
//!
//! Hierarchy navigation, relationship projection and CRUD for employees.
//! Callers (CLI, HTTP, ...) should be thin wrappers that delegate here.

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, Employee, Order, RepositoryProvider, Territory};

const ENTITY: &str = "Employee";

/// Employee service.
///
/// Stateless: holds only the repository provider, so one instance can be
/// shared across concurrent callers behind an `Arc`.
#[derive(Clone)]
pub struct EmployeeService {
    repos: Arc<dyn RepositoryProvider>,
}

impl EmployeeService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// All employees, no filtering.
    pub async fn get_all(&self) -> DomainResult<Vec<Employee>> {
        self.repos.employees().find_all().await
    }

    /// Single employee by id. `None` is a normal outcome, not an error.
    pub async fn get_by_id(&self, id: i32) -> DomainResult<Option<Employee>> {
        debug!(employee_id = id, "Looking up employee");
        self.repos.employees().find_by_id(id).await
    }

    /// Superior of the given employee (two hops: employee, then `reports_to`).
    ///
    /// `NotFound` on `id` if the employee is unknown, `NotFound` on
    /// `reports_to` if the employee is a root or its superior is missing.
    pub async fn get_superior_by_id(&self, id: i32) -> DomainResult<Employee> {
        let employee = self.require(id).await?;

        let Some(superior_id) = employee.reports_to else {
            debug!(employee_id = id, "Employee has no superior");
            return Err(DomainError::not_found(ENTITY, "reports_to", "none"));
        };

        match self.get_by_id(superior_id).await? {
            Some(superior) => Ok(superior),
            None => {
                warn!(
                    employee_id = id,
                    reports_to = superior_id,
                    "Employee reports to a missing superior"
                );
                Err(DomainError::not_found(ENTITY, "reports_to", superior_id))
            }
        }
    }

    /// Employees reporting directly to `id`.
    ///
    /// Does not check that `id` exists: an unknown id and an employee
    /// without subordinates both yield an empty list.
    pub async fn get_subordinates_by_id(&self, id: i32) -> DomainResult<Vec<Employee>> {
        self.repos.employees().find_by_reports_to(id).await
    }

    /// Orders handled by the employee. `NotFound` if the employee is unknown.
    pub async fn get_orders_by_employee_id(&self, id: i32) -> DomainResult<Vec<Order>> {
        let employee = self.require(id).await?;
        self.repos.orders().find_by_employee_id(employee.id).await
    }

    /// Territories assigned to the employee. `NotFound` if the employee is unknown.
    pub async fn get_territories_by_employee_id(&self, id: i32) -> DomainResult<Vec<Territory>> {
        let employee = self.require(id).await?;
        self.repos.territories().find_by_employee_id(employee.id).await
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Persist a new employee. The candidate's id is ignored.
    pub async fn create(&self, candidate: Employee) -> DomainResult<Employee> {
        candidate.validate()?;

        let created = self.repos.employees().insert(candidate).await?;
        info!(
            employee_id = created.id,
            name = %created.full_name(),
            "Employee created"
        );
        Ok(created)
    }

    /// Overwrite all mutable fields of the employee with `candidate.id`.
    pub async fn update(&self, candidate: Employee) -> DomainResult<Employee> {
        candidate.validate()?;

        let id = candidate.id;
        match self.repos.employees().update(candidate).await? {
            Some(updated) => {
                info!(employee_id = id, "Employee updated");
                Ok(updated)
            }
            None => {
                warn!(employee_id = id, "Update of unknown employee");
                Err(DomainError::not_found(ENTITY, "id", id))
            }
        }
    }

    /// Remove the employee and return it as it was before removal.
    pub async fn delete(&self, id: i32) -> DomainResult<Employee> {
        match self.repos.employees().delete(id).await? {
            Some(removed) => {
                info!(employee_id = id, "Employee deleted");
                Ok(removed)
            }
            None => {
                warn!(employee_id = id, "Delete of unknown employee");
                Err(DomainError::not_found(ENTITY, "id", id))
            }
        }
    }

    async fn require(&self, id: i32) -> DomainResult<Employee> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, "id", id))
    }
}
