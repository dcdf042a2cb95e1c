//! SeaORM implementation of TerritoryRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::domain::{DomainResult, Territory, TerritoryRepository};
use crate::infrastructure::database::entities::{employee_territory, territory};

fn entity_to_domain(t: territory::Model) -> Territory {
    Territory {
        id: t.id,
        description: t.description,
        region_id: t.region_id,
    }
}

pub struct SeaOrmTerritoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmTerritoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TerritoryRepository for SeaOrmTerritoryRepository {
    async fn find_by_employee_id(&self, employee_id: i32) -> DomainResult<Vec<Territory>> {
        let models = territory::Entity::find()
            .join(
                JoinType::InnerJoin,
                territory::Relation::EmployeeTerritory.def(),
            )
            .filter(employee_territory::Column::EmployeeId.eq(employee_id))
            .order_by_asc(territory::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
