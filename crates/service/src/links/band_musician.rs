//! Band-to-musician membership. Not a junction: a musician belongs to at
//! most one band through `performer.band_id`, so attach/detach rewrite the
//! foreign key. The same generic component drives it regardless.
use async_trait::async_trait;
use models::performer::{self, PerformerKind};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Value,
};

use crate::errors::ServiceError;
use crate::link::{LinkService, LinkStore};
use crate::lookup::find_performer;

pub struct BandMusiciansStore;

#[async_trait]
impl LinkStore for BandMusiciansStore {
    type Related = performer::Model;

    fn subject_name(&self) -> &'static str {
        "band"
    }

    fn related_name(&self) -> &'static str {
        "musician"
    }

    fn id_of(related: &performer::Model) -> i32 {
        related.id
    }

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(find_performer(conn, id, PerformerKind::Band).await?.is_some())
    }

    async fn find_related<C>(&self, conn: &C, id: i32) -> Result<Option<performer::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        find_performer(conn, id, PerformerKind::Musician).await
    }

    async fn members<C>(&self, conn: &C, subject_id: i32) -> Result<Vec<performer::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer::Entity::find()
            .filter(performer::Column::BandId.eq(subject_id))
            .filter(performer::Column::Kind.eq(PerformerKind::Musician))
            .all(conn)
            .await?)
    }

    async fn attach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        performer::Entity::update_many()
            .col_expr(performer::Column::BandId, Expr::value(subject_id))
            .filter(performer::Column::Id.eq(related_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    async fn detach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        performer::Entity::update_many()
            .col_expr(performer::Column::BandId, Expr::value(Value::Int(None)))
            .filter(performer::Column::Id.eq(related_id))
            .filter(performer::Column::BandId.eq(subject_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    async fn clear<C>(&self, conn: &C, subject_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        performer::Entity::update_many()
            .col_expr(performer::Column::BandId, Expr::value(Value::Int(None)))
            .filter(performer::Column::BandId.eq(subject_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}

pub fn band_musicians(db: DatabaseConnection) -> LinkService<BandMusiciansStore> {
    LinkService::new(db, BandMusiciansStore)
}
