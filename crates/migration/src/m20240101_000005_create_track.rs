//! Create `track` table with FK to `album`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(pk_auto(Track::Id))
                    .col(string_len(Track::Name, 255).not_null())
                    .col(integer(Track::Duration).not_null())
                    .col(integer(Track::AlbumId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_album")
                            .from(Track::Table, Track::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Track::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Track { Table, Id, Name, Duration, AlbumId }

#[derive(DeriveIden)]
enum Album { Table, Id }
