//! Order entity (read-only from this crate)

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(nullable)]
    pub customer_id: Option<String>,

    pub employee_id: i32,

    #[sea_orm(nullable)]
    pub order_date: Option<DateTime<Utc>>,

    #[sea_orm(nullable)]
    pub required_date: Option<DateTime<Utc>>,

    #[sea_orm(nullable)]
    pub shipped_date: Option<DateTime<Utc>>,

    /// Shipper id
    #[sea_orm(nullable)]
    pub ship_via: Option<i32>,

    pub freight: f64,

    #[sea_orm(nullable)]
    pub ship_name: Option<String>,

    #[sea_orm(nullable)]
    pub ship_address: Option<String>,

    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
