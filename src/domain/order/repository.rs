//! Order repository interface

use async_trait::async_trait;

use super::model::Order;
use crate::domain::DomainResult;

/// Read-only access to orders; this crate never creates or removes them.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_employee_id(&self, employee_id: i32) -> DomainResult<Vec<Order>>;
}
