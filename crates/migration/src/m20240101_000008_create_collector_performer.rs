//! Create the `collector_performer` junction table (a collector's favorite
//! performers).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectorPerformer::Table)
                    .if_not_exists()
                    .col(integer(CollectorPerformer::CollectorId).not_null())
                    .col(integer(CollectorPerformer::PerformerId).not_null())
                    .primary_key(
                        Index::create()
                            .col(CollectorPerformer::CollectorId)
                            .col(CollectorPerformer::PerformerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collector_performer_collector")
                            .from(CollectorPerformer::Table, CollectorPerformer::CollectorId)
                            .to(Collector::Table, Collector::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collector_performer_performer")
                            .from(CollectorPerformer::Table, CollectorPerformer::PerformerId)
                            .to(Performer::Table, Performer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CollectorPerformer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CollectorPerformer { Table, CollectorId, PerformerId }

#[derive(DeriveIden)]
enum Collector { Table, Id }

#[derive(DeriveIden)]
enum Performer { Table, Id }
