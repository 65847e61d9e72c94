//! Create `album` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(pk_auto(Album::Id))
                    .col(string_len(Album::Name, 255).not_null())
                    .col(string(Album::Cover).not_null())
                    .col(date(Album::ReleaseDate).not_null())
                    .col(text(Album::Description).not_null())
                    .col(string_len(Album::Genre, 32).not_null())
                    .col(string_len(Album::RecordLabel, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Album::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Album { Table, Id, Name, Cover, ReleaseDate, Description, Genre, RecordLabel }
