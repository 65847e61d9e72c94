use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{not_blank, one_of, parse_date};

pub const GENRES: [&str; 4] = ["Classical", "Salsa", "Rock", "Folk"];
pub const RECORD_LABELS: [&str; 5] =
    ["Sony Music", "EMI", "Discos Fuentes", "Elektra", "Fania Records"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "album")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub cover: String,
    pub release_date: Date,
    pub description: String,
    pub genre: String,
    pub record_label: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Track,
    Comment,
    CollectorAlbum,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Track => Entity::has_many(super::track::Entity)
                .from(Column::Id)
                .to(super::track::Column::AlbumId)
                .into(),
            Relation::Comment => Entity::has_many(super::comment::Entity)
                .from(Column::Id)
                .to(super::comment::Column::AlbumId)
                .into(),
            Relation::CollectorAlbum => Entity::has_many(super::collector_album::Entity)
                .from(Column::Id)
                .to(super::collector_album::Column::AlbumId)
                .into(),
        }
    }
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
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
        super::album_performer::Relation::Performer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_performer::Relation::Album.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Inbound album shape; ids are never taken from the caller.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPayload {
    pub name: String,
    pub cover: String,
    pub release_date: String,
    pub description: String,
    pub genre: String,
    pub record_label: String,
}

impl AlbumPayload {
    /// Checks required fields and enumerations, returning the parsed
    /// release date.
    pub fn validate(&self) -> Result<Date, ModelError> {
        not_blank("name", &self.name)?;
        not_blank("cover", &self.cover)?;
        not_blank("description", &self.description)?;
        one_of("genre", &self.genre, &GENRES)?;
        one_of("recordLabel", &self.record_label, &RECORD_LABELS)?;
        parse_date("releaseDate", &self.release_date)
    }
}
