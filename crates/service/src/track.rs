use models::track::{self, TrackPayload};
use models::album;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

use crate::errors::ServiceError;

/// Tracks are created under an album; the rest of the lifecycle addresses
/// them by their own id.
pub struct TrackService {
    db: DatabaseConnection,
}

impl TrackService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<track::Model>, ServiceError> {
        Ok(track::Entity::find().all(&self.db).await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<track::Model, ServiceError> {
        track::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("track"))
    }

    pub async fn create(&self, album_id: i32, payload: &TrackPayload) -> Result<track::Model, ServiceError> {
        album::Entity::find_by_id(album_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("album"))?;
        payload.validate()?;
        let track = track::ActiveModel {
            name: Set(payload.name.clone()),
            duration: Set(payload.duration),
            album_id: Set(album_id),
            ..Default::default()
        };
        Ok(track.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, payload: &TrackPayload) -> Result<track::Model, ServiceError> {
        let track = track::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("track"))?;
        payload.validate()?;
        let mut track: track::ActiveModel = track.into();
        track.name = Set(payload.name.clone());
        track.duration = Set(payload.duration);
        Ok(track.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let track = track::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("track"))?;
        track.delete(&self.db).await?;
        Ok(())
    }
}
