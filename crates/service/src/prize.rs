use models::performer_prize;
use models::prize::{self, PrizePayload};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use serde::Serialize;

use crate::errors::ServiceError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeDto {
    #[serde(flatten)]
    pub prize: prize::Model,
    pub performer_prizes: Vec<performer_prize::Model>,
}

pub struct PrizeService {
    db: DatabaseConnection,
}

impl PrizeService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_relations(&self, prize: prize::Model) -> Result<PrizeDto, ServiceError> {
        let performer_prizes =
            prize.find_related(performer_prize::Entity).all(&self.db).await?;
        Ok(PrizeDto { prize, performer_prizes })
    }

    pub async fn find_all(&self) -> Result<Vec<PrizeDto>, ServiceError> {
        let prizes = prize::Entity::find().all(&self.db).await?;
        let mut out = Vec::with_capacity(prizes.len());
        for prize in prizes {
            out.push(self.with_relations(prize).await?);
        }
        Ok(out)
    }

    pub async fn find_one(&self, id: i32) -> Result<PrizeDto, ServiceError> {
        let prize = prize::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("prize"))?;
        self.with_relations(prize).await
    }

    pub async fn create(&self, payload: &PrizePayload) -> Result<prize::Model, ServiceError> {
        payload.validate()?;
        let prize = prize::ActiveModel {
            name: Set(payload.name.clone()),
            description: Set(payload.description.clone()),
            organization: Set(payload.organization.clone()),
            ..Default::default()
        };
        Ok(prize.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, payload: &PrizePayload) -> Result<prize::Model, ServiceError> {
        let prize = prize::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("prize"))?;
        payload.validate()?;
        let mut prize: prize::ActiveModel = prize.into();
        prize.name = Set(payload.name.clone());
        prize.description = Set(payload.description.clone());
        prize.organization = Set(payload.organization.clone());
        Ok(prize.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let prize = prize::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("prize"))?;
        prize.delete(&self.db).await?;
        Ok(())
    }
}
