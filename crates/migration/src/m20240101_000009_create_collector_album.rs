//! Create `collector_album`: the attributed link between a collector and an
//! album, carrying price and status.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectorAlbum::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectorAlbum::Id))
                    .col(integer(CollectorAlbum::Price).not_null())
                    .col(string_len(CollectorAlbum::Status, 16).not_null())
                    .col(integer(CollectorAlbum::CollectorId).not_null())
                    .col(integer(CollectorAlbum::AlbumId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collector_album_collector")
                            .from(CollectorAlbum::Table, CollectorAlbum::CollectorId)
                            .to(Collector::Table, Collector::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collector_album_album")
                            .from(CollectorAlbum::Table, CollectorAlbum::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CollectorAlbum::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CollectorAlbum { Table, Id, Price, Status, CollectorId, AlbumId }

#[derive(DeriveIden)]
enum Collector { Table, Id }

#[derive(DeriveIden)]
enum Album { Table, Id }
