//! Performer-to-album membership: the same `album_performer` junction as
//! the album side, walked from a band or musician subject.
use async_trait::async_trait;
use models::performer::PerformerKind;
use models::{album, album_performer};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Set,
};

use crate::errors::ServiceError;
use crate::link::{LinkService, LinkStore};
use crate::lookup::find_performer;

pub struct PerformerAlbumsStore {
    kind: PerformerKind,
}

#[async_trait]
impl LinkStore for PerformerAlbumsStore {
    type Related = album::Model;

    fn subject_name(&self) -> &'static str {
        self.kind.noun()
    }

    fn related_name(&self) -> &'static str {
        "album"
    }

    fn id_of(related: &album::Model) -> i32 {
        related.id
    }

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(find_performer(conn, id, self.kind).await?.is_some())
    }

    async fn find_related<C>(&self, conn: &C, id: i32) -> Result<Option<album::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(album::Entity::find_by_id(id).one(conn).await?)
    }

    async fn members<C>(&self, conn: &C, subject_id: i32) -> Result<Vec<album::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(album::Entity::find()
            .join(JoinType::InnerJoin, album_performer::Relation::Album.def().rev())
            .filter(album_performer::Column::PerformerId.eq(subject_id))
            .all(conn)
            .await?)
    }

    async fn attach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let row = album_performer::ActiveModel {
            album_id: Set(related_id),
            performer_id: Set(subject_id),
        };
        album_performer::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    album_performer::Column::AlbumId,
                    album_performer::Column::PerformerId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn detach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        album_performer::Entity::delete_many()
            .filter(album_performer::Column::PerformerId.eq(subject_id))
            .filter(album_performer::Column::AlbumId.eq(related_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    async fn clear<C>(&self, conn: &C, subject_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        album_performer::Entity::delete_many()
            .filter(album_performer::Column::PerformerId.eq(subject_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}

pub fn band_albums(db: DatabaseConnection) -> LinkService<PerformerAlbumsStore> {
    LinkService::new(db, PerformerAlbumsStore { kind: PerformerKind::Band })
}

pub fn musician_albums(db: DatabaseConnection) -> LinkService<PerformerAlbumsStore> {
    LinkService::new(db, PerformerAlbumsStore { kind: PerformerKind::Musician })
}
