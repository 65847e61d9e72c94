//! Album-to-performer membership, seen from the album side. One store
//! covers both the album/band and album/musician surfaces; the `kind` tag
//! decides which performers resolve and which members are listed.
use async_trait::async_trait;
use models::performer::PerformerKind;
use models::{album, album_performer, performer};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Set,
};

use crate::errors::ServiceError;
use crate::link::{LinkService, LinkStore};
use crate::lookup::find_performer;

pub struct AlbumPerformersStore {
    kind: PerformerKind,
}

#[async_trait]
impl LinkStore for AlbumPerformersStore {
    type Related = performer::Model;

    fn subject_name(&self) -> &'static str {
        "album"
    }

    fn related_name(&self) -> &'static str {
        self.kind.noun()
    }

    fn id_of(related: &performer::Model) -> i32 {
        related.id
    }

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(album::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn find_related<C>(&self, conn: &C, id: i32) -> Result<Option<performer::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        find_performer(conn, id, self.kind).await
    }

    async fn members<C>(&self, conn: &C, subject_id: i32) -> Result<Vec<performer::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(performer::Entity::find()
            .join(JoinType::InnerJoin, album_performer::Relation::Performer.def().rev())
            .filter(album_performer::Column::AlbumId.eq(subject_id))
            .filter(performer::Column::Kind.eq(self.kind))
            .all(conn)
            .await?)
    }

    async fn attach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let row = album_performer::ActiveModel {
            album_id: Set(subject_id),
            performer_id: Set(related_id),
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
            .filter(album_performer::Column::AlbumId.eq(subject_id))
            .filter(album_performer::Column::PerformerId.eq(related_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    async fn clear<C>(&self, conn: &C, subject_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        // Bulk replace rewrites the album's whole performer list, bands
        // and musicians alike.
        album_performer::Entity::delete_many()
            .filter(album_performer::Column::AlbumId.eq(subject_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}

pub fn album_bands(db: DatabaseConnection) -> LinkService<AlbumPerformersStore> {
    LinkService::new(db, AlbumPerformersStore { kind: PerformerKind::Band })
}

pub fn album_musicians(db: DatabaseConnection) -> LinkService<AlbumPerformersStore> {
    LinkService::new(db, AlbumPerformersStore { kind: PerformerKind::Musician })
}
