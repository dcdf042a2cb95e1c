//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use crate::domain::{DomainResult, Employee, EmployeeRepository};
use crate::infrastructure::database::entities::{employee, employee_territory};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(e: employee::Model) -> Employee {
    Employee {
        id: e.id,
        last_name: e.last_name,
        first_name: e.first_name,
        title: e.title,
        title_of_courtesy: e.title_of_courtesy,
        birth_date: e.birth_date,
        hire_date: e.hire_date,
        address: e.address,
        city: e.city,
        region: e.region,
        postal_code: e.postal_code,
        country: e.country,
        home_phone: e.home_phone,
        notes: e.notes,
        avatar_url: e.avatar_url,
        reports_to: e.reports_to,
    }
}

/// Active model with every mutable column set; the id is left to the caller.
fn domain_to_active(e: Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        last_name: Set(e.last_name),
        first_name: Set(e.first_name),
        title: Set(e.title),
        title_of_courtesy: Set(e.title_of_courtesy),
        birth_date: Set(e.birth_date),
        hire_date: Set(e.hire_date),
        address: Set(e.address),
        city: Set(e.city),
        region: Set(e.region),
        postal_code: Set(e.postal_code),
        country: Set(e.country),
        home_phone: Set(e.home_phone),
        notes: Set(e.notes),
        avatar_url: Set(e.avatar_url),
        reports_to: Set(e.reports_to),
        ..Default::default()
    }
}

// ── SeaOrmEmployeeRepository ────────────────────────────────────

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Employee>> {
        let models = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_reports_to(&self, superior_id: i32) -> DomainResult<Vec<Employee>> {
        let models = employee::Entity::find()
            .filter(employee::Column::ReportsTo.eq(superior_id))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn insert(&self, e: Employee) -> DomainResult<Employee> {
        let result = domain_to_active(e).insert(&self.db).await?;
        debug!(employee_id = result.id, "Employee row inserted");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, e: Employee) -> DomainResult<Option<Employee>> {
        let txn = self.db.begin().await?;

        let exists = employee::Entity::find_by_id(e.id).one(&txn).await?.is_some();
        if !exists {
            txn.rollback().await?;
            return Ok(None);
        }

        let id = e.id;
        let mut model = domain_to_active(e);
        model.id = Set(id);
        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(entity_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<Option<Employee>> {
        let txn = self.db.begin().await?;

        let Some(existing) = employee::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        // Explicit so it holds even when the driver has foreign keys off
        employee_territory::Entity::delete_many()
            .filter(employee_territory::Column::EmployeeId.eq(id))
            .exec(&txn)
            .await?;
        employee::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(Some(entity_to_domain(existing)))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::PaginatorTrait;

    use super::*;
    use crate::infrastructure::database::test_support::{
        assign_territory, memory_db, seed_employee, seed_territory,
    };

    #[tokio::test]
    async fn insert_assigns_id_and_round_trips() {
        let repo = SeaOrmEmployeeRepository::new(memory_db().await);

        let mut candidate = Employee::new("Nancy", "Davolio");
        candidate.id = 77;
        candidate.notes = Some("Education includes a BA in psychology.".into());
        let created = repo.insert(candidate).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(created));
        assert_eq!(repo.find_by_id(77).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_reports_to_filters_on_superior() {
        let repo = SeaOrmEmployeeRepository::new(memory_db().await);
        let boss = repo.insert(Employee::new("Andrew", "Fuller")).await.unwrap();
        repo.insert(Employee::new("Nancy", "Davolio").reporting_to(boss.id))
            .await
            .unwrap();
        repo.insert(Employee::new("Janet", "Leverling").reporting_to(boss.id))
            .await
            .unwrap();

        let subordinates: Vec<i32> = repo
            .find_by_reports_to(boss.id)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(subordinates, vec![2, 3]);
        assert!(repo.find_by_reports_to(99).await.unwrap().is_empty());
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let repo = SeaOrmEmployeeRepository::new(memory_db().await);
        let mut ghost = Employee::new("Robert", "King");
        ghost.id = 5;

        assert_eq!(repo.update(ghost).await.unwrap(), None);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields() {
        let repo = SeaOrmEmployeeRepository::new(memory_db().await);
        let mut e = repo.insert(Employee::new("Laura", "Callahan")).await.unwrap();
        e.title = Some("Inside Sales Coordinator".into());
        e.city = Some("Seattle".into());

        let updated = repo.update(e.clone()).await.unwrap();
        assert_eq!(updated, Some(e.clone()));
        assert_eq!(repo.find_by_id(e.id).await.unwrap(), Some(e));
    }

    #[tokio::test]
    async fn delete_returns_snapshot_and_removes_row() {
        let repo = SeaOrmEmployeeRepository::new(memory_db().await);
        let e = repo.insert(Employee::new("Anne", "Dodsworth")).await.unwrap();

        assert_eq!(repo.delete(e.id).await.unwrap(), Some(e.clone()));
        assert_eq!(repo.find_by_id(e.id).await.unwrap(), None);
        assert_eq!(repo.delete(e.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_only_that_employees_territory_rows() {
        let db = memory_db().await;
        let repo = SeaOrmEmployeeRepository::new(db.clone());
        let fuller = seed_employee(&db, "Fuller").await;
        let davolio = seed_employee(&db, "Davolio").await;
        seed_territory(&db, "01581", "Westboro").await;
        seed_territory(&db, "02116", "Boston").await;
        assign_territory(&db, fuller, "01581").await;
        assign_territory(&db, fuller, "02116").await;
        assign_territory(&db, davolio, "01581").await;

        repo.delete(fuller).await.unwrap();

        let remaining = employee_territory::Entity::find().all(&db).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].employee_id, davolio);
        assert_eq!(
            employee_territory::Entity::find()
                .filter(employee_territory::Column::EmployeeId.eq(fuller))
                .count(&db)
                .await
                .unwrap(),
            0
        );
    }
}
