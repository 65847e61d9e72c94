use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::not_blank;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prize")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub organization: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PerformerPrize,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PerformerPrize => Entity::has_many(super::performer_prize::Entity)
                .from(Column::Id)
                .to(super::performer_prize::Column::PrizeId)
                .into(),
        }
    }
}

impl Related<super::performer_prize::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PerformerPrize.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizePayload {
    pub name: String,
    pub description: String,
    pub organization: Option<String>,
}

impl PrizePayload {
    pub fn validate(&self) -> Result<(), ModelError> {
        not_blank("name", &self.name)?;
        not_blank("description", &self.description)
    }
}
