//! Attributed link between a performer and a prize, carrying the date the
//! prize was awarded.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::parse_date_opt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "performer_prize")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub premiation_date: Option<Date>,
    pub performer_id: i32,
    pub prize_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Performer,
    Prize,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Performer => Entity::belongs_to(super::performer::Entity)
                .from(Column::PerformerId)
                .to(super::performer::Column::Id)
                .into(),
            Relation::Prize => Entity::belongs_to(super::prize::Entity)
                .from(Column::PrizeId)
                .to(super::prize::Column::Id)
                .into(),
        }
    }
}

impl Related<super::performer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performer.def()
    }
}

impl Related<super::prize::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prize.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attributes carried by the performer-prize link.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerPrizePayload {
    pub premiation_date: Option<String>,
}

impl PerformerPrizePayload {
    pub fn validate(&self) -> Result<Option<Date>, ModelError> {
        parse_date_opt("premiationDate", self.premiation_date.as_deref())
    }
}
