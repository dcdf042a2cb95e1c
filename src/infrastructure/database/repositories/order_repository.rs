//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{DomainResult, Order, OrderRepository};
use crate::infrastructure::database::entities::order;

fn entity_to_domain(o: order::Model) -> Order {
    Order {
        id: o.id,
        customer_id: o.customer_id,
        employee_id: o.employee_id,
        order_date: o.order_date,
        required_date: o.required_date,
        shipped_date: o.shipped_date,
        ship_via: o.ship_via,
        freight: o.freight,
        ship_name: o.ship_name,
        ship_address: o.ship_address,
        completed: o.completed,
    }
}

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_by_employee_id(&self, employee_id: i32) -> DomainResult<Vec<Order>> {
        let models = order::Entity::find()
            .filter(order::Column::EmployeeId.eq(employee_id))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::{memory_db, seed_order};

    #[tokio::test]
    async fn finds_only_orders_of_employee() {
        let db = memory_db().await;
        seed_order(&db, 10248, 5).await;
        seed_order(&db, 10249, 6).await;
        seed_order(&db, 10251, 5).await;

        let repo = SeaOrmOrderRepository::new(db);
        let ids: Vec<i32> = repo
            .find_by_employee_id(5)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![10248, 10251]);
        assert!(repo.find_by_employee_id(7).await.unwrap().is_empty());
    }
}
