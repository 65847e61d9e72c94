use models::performer::{self, BandPayload, PerformerKind};
use models::{album, performer_prize};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use serde::Serialize;

use crate::errors::ServiceError;
use crate::lookup::find_performer;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDto {
    #[serde(flatten)]
    pub band: performer::Model,
    pub albums: Vec<album::Model>,
    pub musicians: Vec<performer::Model>,
    pub performer_prizes: Vec<performer_prize::Model>,
}

pub struct BandService {
    db: DatabaseConnection,
}

impl BandService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_relations(&self, band: performer::Model) -> Result<BandDto, ServiceError> {
        let albums = band.find_related(album::Entity).all(&self.db).await?;
        let musicians = performer::Entity::find()
            .filter(performer::Column::BandId.eq(band.id))
            .all(&self.db)
            .await?;
        let performer_prizes =
            band.find_related(performer_prize::Entity).all(&self.db).await?;
        Ok(BandDto { band, albums, musicians, performer_prizes })
    }

    pub async fn find_all(&self) -> Result<Vec<BandDto>, ServiceError> {
        let bands = performer::Entity::find()
            .filter(performer::Column::Kind.eq(PerformerKind::Band))
            .all(&self.db)
            .await?;
        let mut out = Vec::with_capacity(bands.len());
        for band in bands {
            out.push(self.with_relations(band).await?);
        }
        Ok(out)
    }

    pub async fn find_one(&self, id: i32) -> Result<BandDto, ServiceError> {
        let band = find_performer(&self.db, id, PerformerKind::Band)
            .await?
            .ok_or_else(|| ServiceError::not_found("band"))?;
        self.with_relations(band).await
    }

    pub async fn create(&self, payload: &BandPayload) -> Result<performer::Model, ServiceError> {
        let creation_date = payload.validate()?;
        let band = performer::ActiveModel {
            kind: Set(PerformerKind::Band),
            name: Set(payload.name.clone()),
            image: Set(payload.image.clone()),
            description: Set(payload.description.clone()),
            creation_date: Set(Some(creation_date)),
            ..Default::default()
        };
        Ok(band.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, payload: &BandPayload) -> Result<performer::Model, ServiceError> {
        let band = find_performer(&self.db, id, PerformerKind::Band)
            .await?
            .ok_or_else(|| ServiceError::not_found("band"))?;
        let creation_date = payload.validate()?;
        let mut band: performer::ActiveModel = band.into();
        band.name = Set(payload.name.clone());
        band.image = Set(payload.image.clone());
        band.description = Set(payload.description.clone());
        band.creation_date = Set(Some(creation_date));
        Ok(band.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let band = find_performer(&self.db, id, PerformerKind::Band)
            .await?
            .ok_or_else(|| ServiceError::not_found("band"))?;
        band.delete(&self.db).await?;
        Ok(())
    }
}
