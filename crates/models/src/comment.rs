use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{in_range, not_blank};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    /// 0 to 5 stars.
    pub rating: i32,
    pub album_id: i32,
    pub collector_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Album,
    Collector,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Album => Entity::belongs_to(super::album::Entity)
                .from(Column::AlbumId)
                .to(super::album::Column::Id)
                .into(),
            Relation::Collector => Entity::belongs_to(super::collector::Entity)
                .from(Column::CollectorId)
                .to(super::collector::Column::Id)
                .into(),
        }
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub description: String,
    pub rating: i32,
    pub collector_id: i32,
}

impl CommentPayload {
    pub fn validate(&self) -> Result<(), ModelError> {
        not_blank("description", &self.description)?;
        in_range("rating", self.rating, 0, 5)
    }
}
