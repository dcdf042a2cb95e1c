//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainResult, Employee, EmployeeRepository, EmployeeTerritory, Order, OrderRepository,
    RepositoryProvider, Territory, TerritoryRepository,
};

/// In-memory repositories for development and testing.
///
/// Orders, territories and assignments are seeded directly; employees go
/// through the repository traits like they would against a database.
pub struct InMemoryRepositoryProvider {
    employees: InMemoryEmployeeRepository,
    orders: InMemoryOrderRepository,
    territories: InMemoryTerritoryRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let assignments = Arc::new(DashMap::new());
        Self {
            employees: InMemoryEmployeeRepository {
                rows: DashMap::new(),
                counter: AtomicI32::new(1),
                assignments: assignments.clone(),
            },
            orders: InMemoryOrderRepository {
                rows: DashMap::new(),
            },
            territories: InMemoryTerritoryRepository {
                rows: DashMap::new(),
                assignments,
            },
        }
    }

    pub fn insert_order(&self, order: Order) {
        self.orders.rows.insert(order.id, order);
    }

    pub fn insert_territory(&self, territory: Territory) {
        self.territories.rows.insert(territory.id.clone(), territory);
    }

    pub fn assign_territory(&self, assignment: EmployeeTerritory) {
        self.territories.assignments.insert(assignment, ());
    }

    /// Territory codes currently assigned to the employee, sorted.
    pub fn assigned_territory_ids(&self, employee_id: i32) -> Vec<String> {
        let mut ids: Vec<String> = self
            .territories
            .assignments
            .iter()
            .filter(|a| a.key().employee_id == employee_id)
            .map(|a| a.key().territory_id.clone())
            .collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
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

// ── Employees ───────────────────────────────────────────────────

struct InMemoryEmployeeRepository {
    rows: DashMap<i32, Employee>,
    counter: AtomicI32,
    /// Shared with the territory repository so delete can drop the join rows.
    assignments: Arc<DashMap<EmployeeTerritory, ()>>,
}

fn sorted_by_id(mut employees: Vec<Employee>) -> Vec<Employee> {
    employees.sort_by_key(|e| e.id);
    employees
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Employee>> {
        Ok(self.rows.get(&id).map(|e| e.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Employee>> {
        Ok(sorted_by_id(
            self.rows.iter().map(|e| e.value().clone()).collect(),
        ))
    }

    async fn find_by_reports_to(&self, superior_id: i32) -> DomainResult<Vec<Employee>> {
        Ok(sorted_by_id(
            self.rows
                .iter()
                .filter(|e| e.reports_to == Some(superior_id))
                .map(|e| e.value().clone())
                .collect(),
        ))
    }

    async fn insert(&self, mut employee: Employee) -> DomainResult<Employee> {
        employee.id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> DomainResult<Option<Employee>> {
        match self.rows.get_mut(&employee.id) {
            Some(mut row) => {
                *row = employee.clone();
                Ok(Some(employee))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<Option<Employee>> {
        let removed = self.rows.remove(&id).map(|(_, e)| e);
        if removed.is_some() {
            self.assignments.retain(|a, _| a.employee_id != id);
        }
        Ok(removed)
    }
}

// ── Orders ──────────────────────────────────────────────────────

struct InMemoryOrderRepository {
    rows: DashMap<i32, Order>,
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_employee_id(&self, employee_id: i32) -> DomainResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .rows
            .iter()
            .filter(|o| o.employee_id == employee_id)
            .map(|o| o.value().clone())
            .collect();
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }
}

// ── Territories ─────────────────────────────────────────────────

struct InMemoryTerritoryRepository {
    rows: DashMap<String, Territory>,
    assignments: Arc<DashMap<EmployeeTerritory, ()>>,
}

#[async_trait]
impl TerritoryRepository for InMemoryTerritoryRepository {
    async fn find_by_employee_id(&self, employee_id: i32) -> DomainResult<Vec<Territory>> {
        let mut territories: Vec<Territory> = self
            .assignments
            .iter()
            .filter(|a| a.key().employee_id == employee_id)
            .filter_map(|a| self.rows.get(&a.key().territory_id).map(|t| t.clone()))
            .collect();
        territories.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(territories)
    }
}
