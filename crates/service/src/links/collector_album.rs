//! Collector-to-album attributed link: each owned album is a
//! `collector_album` record carrying price and status.
use async_trait::async_trait;
use models::collector_album::{self, CollectorAlbumPayload};
use models::{album, collector};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set,
};

use crate::attributed::{AttributedLinkService, AttributedLinkStore};
use crate::errors::ServiceError;

pub struct CollectorAlbumsStore;

#[async_trait]
impl AttributedLinkStore for CollectorAlbumsStore {
    type Attrs = CollectorAlbumPayload;
    type Link = collector_album::Model;

    fn subject_name(&self) -> &'static str {
        "collector"
    }

    fn related_name(&self) -> &'static str {
        "album"
    }

    fn validate(&self, attrs: &CollectorAlbumPayload) -> Result<(), ServiceError> {
        attrs.validate().map_err(ServiceError::from)
    }

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(collector::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn related_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(album::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn insert<C>(
        &self,
        conn: &C,
        subject_id: i32,
        related_id: i32,
        attrs: &CollectorAlbumPayload,
    ) -> Result<collector_album::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let link = collector_album::ActiveModel {
            price: Set(attrs.price),
            status: Set(attrs.status.clone()),
            collector_id: Set(subject_id),
            album_id: Set(related_id),
            ..Default::default()
        };
        Ok(link.insert(conn).await?)
    }

    async fn links_of<C>(
        &self,
        conn: &C,
        subject_id: i32,
    ) -> Result<Vec<collector_album::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(collector_album::Entity::find()
            .filter(collector_album::Column::CollectorId.eq(subject_id))
            .all(conn)
            .await?)
    }

    async fn links_for_pair<C>(
        &self,
        conn: &C,
        subject_id: i32,
        related_id: i32,
    ) -> Result<Vec<collector_album::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(collector_album::Entity::find()
            .filter(collector_album::Column::CollectorId.eq(subject_id))
            .filter(collector_album::Column::AlbumId.eq(related_id))
            .all(conn)
            .await?)
    }

    async fn overwrite<C>(
        &self,
        conn: &C,
        link: collector_album::Model,
        attrs: &CollectorAlbumPayload,
    ) -> Result<collector_album::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut link: collector_album::ActiveModel = link.into();
        link.price = Set(attrs.price);
        link.status = Set(attrs.status.clone());
        Ok(link.update(conn).await?)
    }

    async fn delete<C>(&self, conn: &C, link: collector_album::Model) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        link.delete(conn).await?;
        Ok(())
    }
}

pub fn collector_albums(db: DatabaseConnection) -> AttributedLinkService<CollectorAlbumsStore> {
    AttributedLinkService::new(db, CollectorAlbumsStore)
}
