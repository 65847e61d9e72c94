//! Shared existence lookups used by services and link stores.
use models::performer::{self, PerformerKind};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::errors::ServiceError;

/// Resolve a performer by id, but only if it is of the expected kind; a
/// band id never resolves to a musician and vice versa.
pub(crate) async fn find_performer<C>(
    conn: &C,
    id: i32,
    kind: PerformerKind,
) -> Result<Option<performer::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    Ok(performer::Entity::find_by_id(id)
        .filter(performer::Column::Kind.eq(kind))
        .one(conn)
        .await?)
}
