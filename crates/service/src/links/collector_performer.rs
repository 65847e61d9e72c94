//! Collector favorite-performer membership over the
//! `collector_performer` junction. Bands and musicians both qualify.
use async_trait::async_trait;
use models::{collector, collector_performer, performer};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Set,
};

use crate::errors::ServiceError;
use crate::link::{LinkService, LinkStore};

pub struct CollectorPerformersStore;

#[async_trait]
impl LinkStore for CollectorPerformersStore {
    type Related = performer::Model;

    fn subject_name(&self) -> &'static str {
        "collector"
    }

    fn related_name(&self) -> &'static str {
        "performer"
    }

    fn id_of(related: &performer::Model) -> i32 {
        related.id
    }

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(collector::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn find_related<C>(&self, conn: &C, id: i32) -> Result<Option<performer::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer::Entity::find_by_id(id).one(conn).await?)
    }

    async fn members<C>(&self, conn: &C, subject_id: i32) -> Result<Vec<performer::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer::Entity::find()
            .join(JoinType::InnerJoin, collector_performer::Relation::Performer.def().rev())
            .filter(collector_performer::Column::CollectorId.eq(subject_id))
            .all(conn)
            .await?)
    }

    async fn attach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let row = collector_performer::ActiveModel {
            collector_id: Set(subject_id),
            performer_id: Set(related_id),
        };
        collector_performer::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    collector_performer::Column::CollectorId,
                    collector_performer::Column::PerformerId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn detach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        collector_performer::Entity::delete_many()
            .filter(collector_performer::Column::CollectorId.eq(subject_id))
            .filter(collector_performer::Column::PerformerId.eq(related_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    async fn clear<C>(&self, conn: &C, subject_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        collector_performer::Entity::delete_many()
            .filter(collector_performer::Column::CollectorId.eq(subject_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}

pub fn collector_performers(db: DatabaseConnection) -> LinkService<CollectorPerformersStore> {
    LinkService::new(db, CollectorPerformersStore)
}
