use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::not_blank;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collector")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub telephone: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Comment,
    CollectorAlbum,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Comment => Entity::has_many(super::comment::Entity)
                .from(Column::Id)
                .to(super::comment::Column::CollectorId)
                .into(),
            Relation::CollectorAlbum => Entity::has_many(super::collector_album::Entity)
                .from(Column::Id)
                .to(super::collector_album::Column::CollectorId)
                .into(),
        }
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::collector_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectorAlbum.def()
    }
}

impl Related<super::performer::Entity> for Entity {
    fn to() -> RelationDef {
        super::collector_performer::Relation::Performer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::collector_performer::Relation::Collector.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorPayload {
    pub name: String,
    pub telephone: String,
    pub email: String,
}

impl CollectorPayload {
    pub fn validate(&self) -> Result<(), ModelError> {
        not_blank("name", &self.name)?;
        not_blank("telephone", &self.telephone)?;
        not_blank("email", &self.email)
    }
}
