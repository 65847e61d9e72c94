//! Junction table for a collector's favorite performers.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collector_performer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collector_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub performer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Collector,
    Performer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Collector => Entity::belongs_to(super::collector::Entity)
                .from(Column::CollectorId)
                .to(super::collector::Column::Id)
                .into(),
            Relation::Performer => Entity::belongs_to(super::performer::Entity)
                .from(Column::PerformerId)
                .to(super::performer::Column::Id)
                .into(),
        }
    }
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl Related<super::performer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
