//! Create `prize` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prize::Table)
                    .if_not_exists()
                    .col(pk_auto(Prize::Id))
                    .col(string_len(Prize::Name, 255).not_null())
                    .col(text(Prize::Description).not_null())
                    .col(string_null(Prize::Organization))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Prize::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Prize { Table, Id, Name, Description, Organization }
