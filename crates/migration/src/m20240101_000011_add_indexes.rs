use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Performer: lookups filter on kind, musicians resolve by band_id
        manager
            .create_index(
                Index::create()
                    .name("idx_performer_kind")
                    .table(Performer::Table)
                    .col(Performer::Kind)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_performer_band")
                    .table(Performer::Table)
                    .col(Performer::BandId)
                    .to_owned(),
            )
            .await?;

        // Dependent rows resolve by their parent id
        manager
            .create_index(
                Index::create()
                    .name("idx_track_album")
                    .table(Track::Table)
                    .col(Track::AlbumId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_album")
                    .table(Comment::Table)
                    .col(Comment::AlbumId)
                    .to_owned(),
            )
            .await?;

        // Attributed links resolve by (subject, related) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_collector_album_pair")
                    .table(CollectorAlbum::Table)
                    .col(CollectorAlbum::CollectorId)
                    .col(CollectorAlbum::AlbumId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_performer_prize_pair")
                    .table(PerformerPrize::Table)
                    .col(PerformerPrize::PrizeId)
                    .col(PerformerPrize::PerformerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_performer_kind").table(Performer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_performer_band").table(Performer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_track_album").table(Track::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_album").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_collector_album_pair").table(CollectorAlbum::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_performer_prize_pair").table(PerformerPrize::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Performer { Table, Kind, BandId }

#[derive(DeriveIden)]
enum Track { Table, AlbumId }

#[derive(DeriveIden)]
enum Comment { Table, AlbumId }

#[derive(DeriveIden)]
enum CollectorAlbum { Table, CollectorId, AlbumId }

#[derive(DeriveIden)]
enum PerformerPrize { Table, PrizeId, PerformerId }
