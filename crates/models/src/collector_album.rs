//! Attributed link between a collector and an album: the link record owns
//! a price and a status of its own.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{non_negative, one_of};

pub const STATUSES: [&str; 2] = ["Active", "Inactive"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collector_album")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub status: String,
    pub collector_id: i32,
    pub album_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Collector,
    Album,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Collector => Entity::belongs_to(super::collector::Entity)
                .from(Column::CollectorId)
                .to(super::collector::Column::Id)
                .into(),
            Relation::Album => Entity::belongs_to(super::album::Entity)
                .from(Column::AlbumId)
                .to(super::album::Column::Id)
                .into(),
        }
    }
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attributes carried by the collector-album link.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorAlbumPayload {
    pub price: i32,
    pub status: String,
}

impl CollectorAlbumPayload {
    pub fn validate(&self) -> Result<(), ModelError> {
        non_negative("price", self.price)?;
        one_of("status", &self.status, &STATUSES)
    }
}
