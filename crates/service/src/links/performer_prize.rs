//! Prize-to-performer attributed link: a `performer_prize` record carrying
//! the premiation date.
use async_trait::async_trait;
use models::performer_prize::{self, PerformerPrizePayload};
use models::{performer, prize};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set,
};

use crate::attributed::{AttributedLinkService, AttributedLinkStore};
use crate::errors::ServiceError;

pub struct PrizePerformersStore;

#[async_trait]
impl AttributedLinkStore for PrizePerformersStore {
    type Attrs = PerformerPrizePayload;
    type Link = performer_prize::Model;

    fn subject_name(&self) -> &'static str {
        "prize"
    }

    fn related_name(&self) -> &'static str {
        "performer"
    }

    fn validate(&self, attrs: &PerformerPrizePayload) -> Result<(), ServiceError> {
        attrs.validate().map(|_| ()).map_err(ServiceError::from)
    }

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(prize::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn related_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn insert<C>(
        &self,
        conn: &C,
        subject_id: i32,
        related_id: i32,
        attrs: &PerformerPrizePayload,
    ) -> Result<performer_prize::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let premiation_date = attrs.validate()?;
        let link = performer_prize::ActiveModel {
            premiation_date: Set(premiation_date),
            performer_id: Set(related_id),
            prize_id: Set(subject_id),
            ..Default::default()
        };
        Ok(link.insert(conn).await?)
    }

    async fn links_of<C>(
        &self,
        conn: &C,
        subject_id: i32,
    ) -> Result<Vec<performer_prize::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer_prize::Entity::find()
            .filter(performer_prize::Column::PrizeId.eq(subject_id))
            .all(conn)
            .await?)
    }

    async fn links_for_pair<C>(
        &self,
        conn: &C,
        subject_id: i32,
        related_id: i32,
    ) -> Result<Vec<performer_prize::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer_prize::Entity::find()
            .filter(performer_prize::Column::PrizeId.eq(subject_id))
            .filter(performer_prize::Column::PerformerId.eq(related_id))
            .all(conn)
            .await?)
    }

    async fn overwrite<C>(
        &self,
        conn: &C,
        link: performer_prize::Model,
        attrs: &PerformerPrizePayload,
    ) -> Result<performer_prize::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let premiation_date = attrs.validate()?;
        let mut link: performer_prize::ActiveModel = link.into();
        link.premiation_date = Set(premiation_date);
        Ok(link.update(conn).await?)
    }

    async fn delete<C>(&self, conn: &C, link: performer_prize::Model) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        link.delete(conn).await?;
        Ok(())
    }
}

pub fn prize_performers(db: DatabaseConnection) -> AttributedLinkService<PrizePerformersStore> {
    AttributedLinkService::new(db, PrizePerformersStore)
}

/// Every performer-prize link in the store, regardless of prize.
pub async fn find_all_performer_prizes(
    db: &DatabaseConnection,
) -> Result<Vec<performer_prize::Model>, ServiceError> {
    Ok(performer_prize::Entity::find().all(db).await?)
}
