use models::performer::{self, MusicianPayload, PerformerKind};
use models::{album, performer_prize};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use serde::Serialize;

use crate::errors::ServiceError;
use crate::lookup::find_performer;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianDto {
    #[serde(flatten)]
    pub musician: performer::Model,
    pub albums: Vec<album::Model>,
    pub performer_prizes: Vec<performer_prize::Model>,
}

pub struct MusicianService {
    db: DatabaseConnection,
}

impl MusicianService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_relations(&self, musician: performer::Model) -> Result<MusicianDto, ServiceError> {
        let albums = musician.find_related(album::Entity).all(&self.db).await?;
        let performer_prizes =
            musician.find_related(performer_prize::Entity).all(&self.db).await?;
        Ok(MusicianDto { musician, albums, performer_prizes })
    }

    pub async fn find_all(&self) -> Result<Vec<MusicianDto>, ServiceError> {
        let musicians = performer::Entity::find()
            .filter(performer::Column::Kind.eq(PerformerKind::Musician))
            .all(&self.db)
            .await?;
        let mut out = Vec::with_capacity(musicians.len());
        for musician in musicians {
            out.push(self.with_relations(musician).await?);
        }
        Ok(out)
    }

    pub async fn find_one(&self, id: i32) -> Result<MusicianDto, ServiceError> {
        let musician = find_performer(&self.db, id, PerformerKind::Musician)
            .await?
            .ok_or_else(|| ServiceError::not_found("musician"))?;
        self.with_relations(musician).await
    }

    pub async fn create(&self, payload: &MusicianPayload) -> Result<performer::Model, ServiceError> {
        let birth_date = payload.validate()?;
        let musician = performer::ActiveModel {
            kind: Set(PerformerKind::Musician),
            name: Set(payload.name.clone()),
            image: Set(payload.image.clone()),
            description: Set(payload.description.clone()),
            birth_date: Set(birth_date),
            ..Default::default()
        };
        Ok(musician.insert(&self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &MusicianPayload,
    ) -> Result<performer::Model, ServiceError> {
        let musician = find_performer(&self.db, id, PerformerKind::Musician)
            .await?
            .ok_or_else(|| ServiceError::not_found("musician"))?;
        let birth_date = payload.validate()?;
        let mut musician: performer::ActiveModel = musician.into();
        musician.name = Set(payload.name.clone());
        musician.image = Set(payload.image.clone());
        musician.description = Set(payload.description.clone());
        musician.birth_date = Set(birth_date);
        Ok(musician.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let musician = find_performer(&self.db, id, PerformerKind::Musician)
            .await?
            .ok_or_else(|| ServiceError::not_found("musician"))?;
        musician.delete(&self.db).await?;
        Ok(())
    }
}
