//! Create `performer_prize`: the attributed link between a performer and a
//! prize, carrying the premiation date.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PerformerPrize::Table)
                    .if_not_exists()
                    .col(pk_auto(PerformerPrize::Id))
                    .col(date_null(PerformerPrize::PremiationDate))
                    .col(integer(PerformerPrize::PerformerId).not_null())
                    .col(integer(PerformerPrize::PrizeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performer_prize_performer")
                            .from(PerformerPrize::Table, PerformerPrize::PerformerId)
                            .to(Performer::Table, Performer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performer_prize_prize")
                            .from(PerformerPrize::Table, PerformerPrize::PrizeId)
                            .to(Prize::Table, Prize::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PerformerPrize::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PerformerPrize { Table, Id, PremiationDate, PerformerId, PrizeId }

#[derive(DeriveIden)]
enum Performer { Table, Id }

#[derive(DeriveIden)]
enum Prize { Table, Id }
