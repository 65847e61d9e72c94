use models::album::{self, AlbumPayload};
use models::{comment, performer, track};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use serde::Serialize;

use crate::errors::ServiceError;

/// Album as exposed to callers: the record plus its eagerly attached
/// relations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    #[serde(flatten)]
    pub album: album::Model,
    pub tracks: Vec<track::Model>,
    pub performers: Vec<performer::Model>,
    pub comments: Vec<comment::Model>,
}

pub struct AlbumService {
    db: DatabaseConnection,
}

impl AlbumService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_relations(&self, album: album::Model) -> Result<AlbumDto, ServiceError> {
        let tracks = album.find_related(track::Entity).all(&self.db).await?;
        let performers = album.find_related(performer::Entity).all(&self.db).await?;
        let comments = album.find_related(comment::Entity).all(&self.db).await?;
        Ok(AlbumDto { album, tracks, performers, comments })
    }

    pub async fn find_all(&self) -> Result<Vec<AlbumDto>, ServiceError> {
        let albums = album::Entity::find().all(&self.db).await?;
        let mut out = Vec::with_capacity(albums.len());
        for album in albums {
            out.push(self.with_relations(album).await?);
        }
        Ok(out)
    }

    pub async fn find_one(&self, id: i32) -> Result<AlbumDto, ServiceError> {
        let album = album::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("album"))?;
        self.with_relations(album).await
    }

    pub async fn create(&self, payload: &AlbumPayload) -> Result<album::Model, ServiceError> {
        let release_date = payload.validate()?;
        let album = album::ActiveModel {
            name: Set(payload.name.clone()),
            cover: Set(payload.cover.clone()),
            release_date: Set(release_date),
            description: Set(payload.description.clone()),
            genre: Set(payload.genre.clone()),
            record_label: Set(payload.record_label.clone()),
            ..Default::default()
        };
        Ok(album.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, payload: &AlbumPayload) -> Result<album::Model, ServiceError> {
        let album = album::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("album"))?;
        let release_date = payload.validate()?;
        let mut album: album::ActiveModel = album.into();
        album.name = Set(payload.name.clone());
        album.cover = Set(payload.cover.clone());
        album.release_date = Set(release_date);
        album.description = Set(payload.description.clone());
        album.genre = Set(payload.genre.clone());
        album.record_label = Set(payload.record_label.clone());
        Ok(album.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let album = album::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("album"))?;
        album.delete(&self.db).await?;
        Ok(())
    }
}
