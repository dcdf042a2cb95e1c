//! Employee entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub last_name: String,

    pub first_name: String,

    #[sea_orm(nullable)]
    pub title: Option<String>,

    /// e.g. "Ms.", "Dr."
    #[sea_orm(nullable)]
    pub title_of_courtesy: Option<String>,

    #[sea_orm(nullable)]
    pub birth_date: Option<DateTime<Utc>>,

    #[sea_orm(nullable)]
    pub hire_date: Option<DateTime<Utc>>,

    #[sea_orm(nullable)]
    pub address: Option<String>,

    #[sea_orm(nullable)]
    pub city: Option<String>,

    #[sea_orm(nullable)]
    pub region: Option<String>,

    #[sea_orm(nullable)]
    pub postal_code: Option<String>,

    #[sea_orm(nullable)]
    pub country: Option<String>,

    #[sea_orm(nullable)]
    pub home_phone: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    #[sea_orm(nullable)]
    pub avatar_url: Option<String>,

    /// Superior's employee id. Not a foreign key: dangling values are
    /// allowed and resolve to "no superior" on read.
    #[sea_orm(nullable)]
    pub reports_to: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::employee_territory::Entity")]
    EmployeeTerritory,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::employee_territory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeTerritory.def()
    }
}

impl Related<super::territory::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_territory::Relation::Territory.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_territory::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
