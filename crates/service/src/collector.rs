use models::collector::{self, CollectorPayload};
use models::{collector_album, comment, performer};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use serde::Serialize;

use crate::errors::ServiceError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorDto {
    #[serde(flatten)]
    pub collector: collector::Model,
    pub comments: Vec<comment::Model>,
    pub favorite_performers: Vec<performer::Model>,
    pub collector_albums: Vec<collector_album::Model>,
}

pub struct CollectorService {
    db: DatabaseConnection,
}

impl CollectorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_relations(&self, collector: collector::Model) -> Result<CollectorDto, ServiceError> {
        let comments = collector.find_related(comment::Entity).all(&self.db).await?;
        let favorite_performers =
            collector.find_related(performer::Entity).all(&self.db).await?;
        let collector_albums =
            collector.find_related(collector_album::Entity).all(&self.db).await?;
        Ok(CollectorDto { collector, comments, favorite_performers, collector_albums })
    }

    pub async fn find_all(&self) -> Result<Vec<CollectorDto>, ServiceError> {
        let collectors = collector::Entity::find().all(&self.db).await?;
        let mut out = Vec::with_capacity(collectors.len());
        for collector in collectors {
            out.push(self.with_relations(collector).await?);
        }
        Ok(out)
    }

    pub async fn find_one(&self, id: i32) -> Result<CollectorDto, ServiceError> {
        let collector = collector::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("collector"))?;
        self.with_relations(collector).await
    }

    pub async fn create(&self, payload: &CollectorPayload) -> Result<collector::Model, ServiceError> {
        payload.validate()?;
        let collector = collector::ActiveModel {
            name: Set(payload.name.clone()),
            telephone: Set(payload.telephone.clone()),
            email: Set(payload.email.clone()),
            ..Default::default()
        };
        Ok(collector.insert(&self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &CollectorPayload,
    ) -> Result<collector::Model, ServiceError> {
        let collector = collector::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("collector"))?;
        payload.validate()?;
        let mut collector: collector::ActiveModel = collector.into();
        collector.name = Set(payload.name.clone());
        collector.telephone = Set(payload.telephone.clone());
        collector.email = Set(payload.email.clone());
        Ok(collector.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let collector = collector::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("collector"))?;
        collector.delete(&self.db).await?;
        Ok(())
    }
}
