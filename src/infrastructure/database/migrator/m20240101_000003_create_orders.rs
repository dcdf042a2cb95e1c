//! Create orders table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::CustomerId).string_len(5))
                    // Kept as a historical reference after the employee is deleted
                    .col(ColumnDef::new(Orders::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(Orders::OrderDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Orders::RequiredDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Orders::ShippedDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Orders::ShipVia).integer())
                    .col(
                        ColumnDef::new(Orders::Freight)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Orders::ShipName).string_len(40))
                    .col(ColumnDef::new(Orders::ShipAddress).string_len(60))
                    .col(
                        ColumnDef::new(Orders::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_employee_id")
                    .table(Orders::Table)
                    .col(Orders::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Orders {
    Table,
    Id,
    CustomerId,
    EmployeeId,
    OrderDate,
    RequiredDate,
    ShippedDate,
    ShipVia,
    Freight,
    ShipName,
    ShipAddress,
    Completed,
}
