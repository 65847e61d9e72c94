//! Create `comment` table with FKs to `album` and `collector`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(text(Comment::Description).not_null())
                    .col(integer(Comment::Rating).not_null())
                    .col(integer(Comment::AlbumId).not_null())
                    .col(integer(Comment::CollectorId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_album")
                            .from(Comment::Table, Comment::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_collector")
                            .from(Comment::Table, Comment::CollectorId)
                            .to(Collector::Table, Collector::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Comment { Table, Id, Description, Rating, AlbumId, CollectorId }

#[derive(DeriveIden)]
enum Album { Table, Id }

#[derive(DeriveIden)]
enum Collector { Table, Id }
