//! Create employees table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Employees::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Employees::Title).string_len(30))
                    .col(ColumnDef::new(Employees::TitleOfCourtesy).string_len(25))
                    .col(ColumnDef::new(Employees::BirthDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Employees::HireDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Employees::Address).string_len(60))
                    .col(ColumnDef::new(Employees::City).string_len(15))
                    .col(ColumnDef::new(Employees::Region).string_len(15))
                    .col(ColumnDef::new(Employees::PostalCode).string_len(10))
                    .col(ColumnDef::new(Employees::Country).string_len(15))
                    .col(ColumnDef::new(Employees::HomePhone).string_len(24))
                    .col(ColumnDef::new(Employees::Notes).text())
                    .col(ColumnDef::new(Employees::AvatarUrl).string())
                    // No foreign key: reports_to may dangle
                    .col(ColumnDef::new(Employees::ReportsTo).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_reports_to")
                    .table(Employees::Table)
                    .col(Employees::ReportsTo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Employees {
    Table,
    Id,
    LastName,
    FirstName,
    Title,
    TitleOfCourtesy,
    BirthDate,
    HireDate,
    Address,
    City,
    Region,
    PostalCode,
    Country,
    HomePhone,
    Notes,
    AvatarUrl,
    ReportsTo,
}
