//! Create employee_territories join table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_employees::Employees;
use super::m20240101_000002_create_territories::Territories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeTerritories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeTerritories::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeTerritories::TerritoryId)
                            .string_len(20)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EmployeeTerritories::EmployeeId)
                            .col(EmployeeTerritories::TerritoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_territories_employee")
                            .from(EmployeeTerritories::Table, EmployeeTerritories::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_territories_territory")
                            .from(EmployeeTerritories::Table, EmployeeTerritories::TerritoryId)
                            .to(Territories::Table, Territories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeTerritories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EmployeeTerritories {
    Table,
    EmployeeId,
    TerritoryId,
}
