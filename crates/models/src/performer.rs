use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{not_blank, parse_date, parse_date_opt};

/// Discriminator for the single `performer` table shared by bands and
/// musicians. An explicit tag, never runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum PerformerKind {
    #[sea_orm(string_value = "band")]
    Band,
    #[sea_orm(string_value = "musician")]
    Musician,
}

impl PerformerKind {
    /// Name used in error messages ("band", "musician").
    pub fn noun(&self) -> &'static str {
        match self {
            PerformerKind::Band => "band",
            PerformerKind::Musician => "musician",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "performer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: PerformerKind,
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    /// Set for bands only.
    pub creation_date: Option<Date>,
    /// Set for musicians only.
    pub birth_date: Option<Date>,
    /// The band a musician belongs to.
    pub band_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Band,
    Musicians,
    PerformerPrize,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Band => Entity::belongs_to(Entity)
                .from(Column::BandId)
                .to(Column::Id)
                .into(),
            Relation::Musicians => {
                // Self-referential has-many: sea-orm's `has_many` requires
                // `Related<Self>`, which an entity can't satisfy for itself.
                // Build the equivalent HasMany def directly (id -> band_id).
                let mut def: RelationDef = Entity::belongs_to(Entity)
                    .from(Column::Id)
                    .to(Column::BandId)
                    .into();
                def.rel_type = sea_orm::RelationType::HasMany;
                def.is_owner = true;
                def
            }
            Relation::PerformerPrize => Entity::has_many(super::performer_prize::Entity)
                .from(Column::Id)
                .to(super::performer_prize::Column::PerformerId)
                .into(),
        }
    }
}

impl Related<super::performer_prize::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PerformerPrize.def()
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        super::album_performer::Relation::Album.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_performer::Relation::Performer.def().rev())
    }
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        super::collector_performer::Relation::Collector.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::collector_performer::Relation::Performer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Inbound band shape.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandPayload {
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub creation_date: String,
}

impl BandPayload {
    pub fn validate(&self) -> Result<Date, ModelError> {
        not_blank("name", &self.name)?;
        not_blank("description", &self.description)?;
        parse_date("creationDate", &self.creation_date)
    }
}

/// Inbound musician shape; the birth date is optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianPayload {
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub birth_date: Option<String>,
}

impl MusicianPayload {
    pub fn validate(&self) -> Result<Option<Date>, ModelError> {
        not_blank("name", &self.name)?;
        not_blank("description", &self.description)?;
        parse_date_opt("birthDate", self.birth_date.as_deref())
    }
}
