use models::comment::{self, CommentPayload};
use models::{album, collector};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

use crate::errors::ServiceError;

/// Comments live under an album and reference the collector who wrote
/// them. A comment looked up under an album it does not belong to is
/// signaled as NOT_FOUND.
pub struct CommentService {
    db: DatabaseConnection,
}

impl CommentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require_album(&self, album_id: i32) -> Result<album::Model, ServiceError> {
        album::Entity::find_by_id(album_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("album"))
    }

    async fn require_collector(&self, collector_id: i32) -> Result<collector::Model, ServiceError> {
        collector::Entity::find_by_id(collector_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("collector"))
    }

    async fn require_comment(&self, comment_id: i32) -> Result<comment::Model, ServiceError> {
        comment::Entity::find_by_id(comment_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("comment"))
    }

    fn require_membership(album_id: i32, comment: &comment::Model) -> Result<(), ServiceError> {
        if comment.album_id != album_id {
            return Err(ServiceError::NotFound(
                "The comment is not associated to the album".into(),
            ));
        }
        Ok(())
    }

    pub async fn find_by_album(&self, album_id: i32) -> Result<Vec<comment::Model>, ServiceError> {
        let album = self.require_album(album_id).await?;
        Ok(album.find_related(comment::Entity).all(&self.db).await?)
    }

    pub async fn find_one(&self, album_id: i32, comment_id: i32) -> Result<comment::Model, ServiceError> {
        self.require_album(album_id).await?;
        let comment = self.require_comment(comment_id).await?;
        Self::require_membership(album_id, &comment)?;
        Ok(comment)
    }

    pub async fn add(&self, album_id: i32, payload: &CommentPayload) -> Result<comment::Model, ServiceError> {
        let album = self.require_album(album_id).await?;
        let collector = self.require_collector(payload.collector_id).await?;
        payload.validate()?;
        let comment = comment::ActiveModel {
            description: Set(payload.description.clone()),
            rating: Set(payload.rating),
            album_id: Set(album.id),
            collector_id: Set(collector.id),
            ..Default::default()
        };
        Ok(comment.insert(&self.db).await?)
    }

    pub async fn update(
        &self,
        album_id: i32,
        comment_id: i32,
        payload: &CommentPayload,
    ) -> Result<comment::Model, ServiceError> {
        self.require_album(album_id).await?;
        let collector = self.require_collector(payload.collector_id).await?;
        let comment = self.require_comment(comment_id).await?;
        Self::require_membership(album_id, &comment)?;
        payload.validate()?;
        let mut comment: comment::ActiveModel = comment.into();
        comment.description = Set(payload.description.clone());
        comment.rating = Set(payload.rating);
        comment.collector_id = Set(collector.id);
        Ok(comment.update(&self.db).await?)
    }

    pub async fn delete(&self, album_id: i32, comment_id: i32) -> Result<(), ServiceError> {
        self.require_album(album_id).await?;
        let comment = self.require_comment(comment_id).await?;
        Self::require_membership(album_id, &comment)?;
        comment.delete(&self.db).await?;
        Ok(())
    }
}
