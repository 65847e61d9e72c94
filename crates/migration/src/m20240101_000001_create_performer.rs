//! Create `performer` table.
//!
//! Bands and musicians share this table, discriminated by `kind`; a
//! musician's `band_id` points back at its band row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Performer::Table)
                    .if_not_exists()
                    .col(pk_auto(Performer::Id))
                    .col(string_len(Performer::Kind, 16).not_null())
                    .col(string_len(Performer::Name, 255).not_null())
                    .col(string_null(Performer::Image))
                    .col(text(Performer::Description).not_null())
                    .col(date_null(Performer::CreationDate))
                    .col(date_null(Performer::BirthDate))
                    .col(integer_null(Performer::BandId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performer_band")
                            .from(Performer::Table, Performer::BandId)
                            .to(Performer::Table, Performer::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Performer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Performer { Table, Id, Kind, Name, Image, Description, CreationDate, BirthDate, BandId }
