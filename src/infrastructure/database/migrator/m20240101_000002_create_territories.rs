//! Create territories table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Territories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Territories::Id)
                            .string_len(20)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Territories::Description)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Territories::RegionId).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Territories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Territories {
    Table,
    Id,
    Description,
    RegionId,
}
