//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_performer;
mod m20240101_000002_create_album;
mod m20240101_000003_create_collector;
mod m20240101_000004_create_prize;
mod m20240101_000005_create_track;
mod m20240101_000006_create_comment;
mod m20240101_000007_create_album_performer;
mod m20240101_000008_create_collector_performer;
mod m20240101_000009_create_collector_album;
mod m20240101_000010_create_performer_prize;
mod m20240101_000011_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_performer::Migration),
            Box::new(m20240101_000002_create_album::Migration),
            Box::new(m20240101_000003_create_collector::Migration),
            Box::new(m20240101_000004_create_prize::Migration),
            Box::new(m20240101_000005_create_track::Migration),
            Box::new(m20240101_000006_create_comment::Migration),
            Box::new(m20240101_000007_create_album_performer::Migration),
            Box::new(m20240101_000008_create_collector_performer::Migration),
            Box::new(m20240101_000009_create_collector_album::Migration),
            Box::new(m20240101_000010_create_performer_prize::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000011_add_indexes::Migration),
        ]
    }
}
