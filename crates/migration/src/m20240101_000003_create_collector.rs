//! Create `collector` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collector::Table)
                    .if_not_exists()
                    .col(pk_auto(Collector::Id))
                    .col(string_len(Collector::Name, 255).not_null())
                    .col(string_len(Collector::Telephone, 32).not_null())
                    .col(string_len(Collector::Email, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Collector::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Collector { Table, Id, Name, Telephone, Email }
