//! Territory entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "territories")]
pub struct Model {
    /// Territory code, e.g. "01581"
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub description: String,

    pub region_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_territory::Entity")]
    EmployeeTerritory,
}

impl Related<super::employee_territory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeTerritory.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_territory::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_territory::Relation::Territory.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
