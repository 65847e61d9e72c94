//! Generic pure-association component: manages a membership list between a
//! subject entity and a related entity with no data on the link itself.
//! One control-flow implementation serves every (subject, related) pair;
//! the pair-specific storage primitives live behind [`LinkStore`].
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::errors::ServiceError;

/// Storage primitives for one (subject, related) pair. Implementations are
/// thin adapters over a junction table or a foreign-key column; all
/// existence checking and error signaling stays in [`LinkService`].
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// The related-side record handed back to callers.
    type Related: Send + Sync;

    fn subject_name(&self) -> &'static str;
    fn related_name(&self) -> &'static str;
    fn id_of(related: &Self::Related) -> i32;

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait;

    async fn find_related<C>(&self, conn: &C, id: i32) -> Result<Option<Self::Related>, ServiceError>
    where
        C: ConnectionTrait;

    /// The subject's current member list.
    async fn members<C>(&self, conn: &C, subject_id: i32) -> Result<Vec<Self::Related>, ServiceError>
    where
        C: ConnectionTrait;

    /// Idempotent on the (subject, related) key.
    async fn attach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait;

    async fn detach<C>(&self, conn: &C, subject_id: i32, related_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait;

    /// Drop every member of the subject's list.
    async fn clear<C>(&self, conn: &C, subject_id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait;
}

pub struct LinkService<S: LinkStore> {
    db: DatabaseConnection,
    store: S,
}

impl<S: LinkStore> LinkService<S> {
    pub fn new(db: DatabaseConnection, store: S) -> Self {
        Self { db, store }
    }

    async fn require_subject(&self, id: i32) -> Result<(), ServiceError> {
        if !self.store.subject_exists(&self.db, id).await? {
            return Err(ServiceError::not_found(self.store.subject_name()));
        }
        Ok(())
    }

    async fn require_related(&self, id: i32) -> Result<S::Related, ServiceError> {
        self.store
            .find_related(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(self.store.related_name()))
    }

    /// Links one related record to the subject and returns the refreshed
    /// member list.
    pub async fn add(&self, subject_id: i32, related_id: i32) -> Result<Vec<S::Related>, ServiceError> {
        self.require_subject(subject_id).await?;
        let related = self.require_related(related_id).await?;
        self.store.attach(&self.db, subject_id, S::id_of(&related)).await?;
        self.store.members(&self.db, subject_id).await
    }

    /// Returns the linked related record for the pair. Both endpoints are
    /// loaded first so that a missing record reports NOT_FOUND; only then
    /// is the member list scanned, so an unlinked pair of existing records
    /// reports PRECONDITION_FAILED.
    pub async fn find_one(&self, subject_id: i32, related_id: i32) -> Result<S::Related, ServiceError> {
        self.require_subject(subject_id).await?;
        let related = self.require_related(related_id).await?;
        let members = self.store.members(&self.db, subject_id).await?;
        members
            .into_iter()
            .find(|m| S::id_of(m) == S::id_of(&related))
            .ok_or_else(|| {
                ServiceError::not_associated(self.store.related_name(), self.store.subject_name())
            })
    }

    pub async fn list(&self, subject_id: i32) -> Result<Vec<S::Related>, ServiceError> {
        self.require_subject(subject_id).await?;
        self.store.members(&self.db, subject_id).await
    }

    /// Bulk replace: the member list becomes exactly `related_ids`. Runs in
    /// a single store transaction; the first id that fails to resolve
    /// aborts the whole operation with NOT_FOUND and no partial
    /// replacement.
    pub async fn associate(
        &self,
        subject_id: i32,
        related_ids: &[i32],
    ) -> Result<Vec<S::Related>, ServiceError> {
        self.require_subject(subject_id).await?;

        let txn = self.db.begin().await?;
        let mut resolved = Vec::with_capacity(related_ids.len());
        for &id in related_ids {
            let related = self
                .store
                .find_related(&txn, id)
                .await?
                .ok_or_else(|| ServiceError::not_found(self.store.related_name()))?;
            resolved.push(related);
        }
        self.store.clear(&txn, subject_id).await?;
        for related in &resolved {
            self.store.attach(&txn, subject_id, S::id_of(related)).await?;
        }
        txn.commit().await?;
        info!(
            subject = self.store.subject_name(),
            related = self.store.related_name(),
            subject_id,
            count = related_ids.len(),
            "association list replaced"
        );

        self.store.members(&self.db, subject_id).await
    }

    /// Unlinks the pair and returns the remaining member list.
    pub async fn remove(&self, subject_id: i32, related_id: i32) -> Result<Vec<S::Related>, ServiceError> {
        self.require_subject(subject_id).await?;
        let related = self.require_related(related_id).await?;
        self.store.detach(&self.db, subject_id, S::id_of(&related)).await?;
        self.store.members(&self.db, subject_id).await
    }
}
