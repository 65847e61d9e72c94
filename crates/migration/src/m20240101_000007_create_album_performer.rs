//! Create the `album_performer` junction table (album M:N performer).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlbumPerformer::Table)
                    .if_not_exists()
                    .col(integer(AlbumPerformer::AlbumId).not_null())
                    .col(integer(AlbumPerformer::PerformerId).not_null())
                    .primary_key(
                        Index::create()
                            .col(AlbumPerformer::AlbumId)
                            .col(AlbumPerformer::PerformerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_performer_album")
                            .from(AlbumPerformer::Table, AlbumPerformer::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_performer_performer")
                            .from(AlbumPerformer::Table, AlbumPerformer::PerformerId)
                            .to(Performer::Table, Performer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AlbumPerformer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AlbumPerformer { Table, AlbumId, PerformerId }

#[derive(DeriveIden)]
enum Album { Table, Id }

#[derive(DeriveIden)]
enum Performer { Table, Id }
