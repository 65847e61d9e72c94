//! Generic attributed-association component: the link between subject and
//! related is a first-class record carrying its own fields (price/status,
//! premiation date). Uniqueness per (subject, related) pair is intent, not
//! store-enforced; lookups take the first matching link.
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::errors::ServiceError;

#[async_trait]
pub trait AttributedLinkStore: Send + Sync {
    /// Inbound attribute shape for the link record.
    type Attrs: Send + Sync;
    /// The persisted link record.
    type Link: Send + Sync;

    fn subject_name(&self) -> &'static str;
    fn related_name(&self) -> &'static str;

    fn validate(&self, attrs: &Self::Attrs) -> Result<(), ServiceError>;

    async fn subject_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait;

    async fn related_exists<C>(&self, conn: &C, id: i32) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait;

    async fn insert<C>(
        &self,
        conn: &C,
        subject_id: i32,
        related_id: i32,
        attrs: &Self::Attrs,
    ) -> Result<Self::Link, ServiceError>
    where
        C: ConnectionTrait;

    /// Every link record belonging to the subject.
    async fn links_of<C>(&self, conn: &C, subject_id: i32) -> Result<Vec<Self::Link>, ServiceError>
    where
        C: ConnectionTrait;

    /// The link records joining this exact pair.
    async fn links_for_pair<C>(
        &self,
        conn: &C,
        subject_id: i32,
        related_id: i32,
    ) -> Result<Vec<Self::Link>, ServiceError>
    where
        C: ConnectionTrait;

    async fn overwrite<C>(
        &self,
        conn: &C,
        link: Self::Link,
        attrs: &Self::Attrs,
    ) -> Result<Self::Link, ServiceError>
    where
        C: ConnectionTrait;

    async fn delete<C>(&self, conn: &C, link: Self::Link) -> Result<(), ServiceError>
    where
        C: ConnectionTrait;
}

pub struct AttributedLinkService<S: AttributedLinkStore> {
    db: DatabaseConnection,
    store: S,
}

impl<S: AttributedLinkStore> AttributedLinkService<S> {
    pub fn new(db: DatabaseConnection, store: S) -> Self {
        Self { db, store }
    }

    async fn require_subject(&self, id: i32) -> Result<(), ServiceError> {
        if !self.store.subject_exists(&self.db, id).await? {
            return Err(ServiceError::not_found(self.store.subject_name()));
        }
        Ok(())
    }

    async fn require_related(&self, id: i32) -> Result<(), ServiceError> {
        if !self.store.related_exists(&self.db, id).await? {
            return Err(ServiceError::not_found(self.store.related_name()));
        }
        Ok(())
    }

    /// This family signals a missing link as NOT_FOUND, not
    /// PRECONDITION_FAILED.
    fn link_missing(&self) -> ServiceError {
        ServiceError::NotFound(format!(
            "The {} is not associated to the {}",
            self.store.related_name(),
            self.store.subject_name()
        ))
    }

    pub async fn add(
        &self,
        subject_id: i32,
        related_id: i32,
        attrs: &S::Attrs,
    ) -> Result<S::Link, ServiceError> {
        self.require_subject(subject_id).await?;
        self.require_related(related_id).await?;
        self.store.validate(attrs)?;
        self.store.insert(&self.db, subject_id, related_id, attrs).await
    }

    pub async fn list(&self, subject_id: i32) -> Result<Vec<S::Link>, ServiceError> {
        self.require_subject(subject_id).await?;
        self.store.links_of(&self.db, subject_id).await
    }

    /// Returns the matching links for the pair; an unlinked pair yields an
    /// empty list rather than an error.
    pub async fn find(&self, subject_id: i32, related_id: i32) -> Result<Vec<S::Link>, ServiceError> {
        self.require_subject(subject_id).await?;
        self.require_related(related_id).await?;
        self.store.links_for_pair(&self.db, subject_id, related_id).await
    }

    pub async fn update(
        &self,
        subject_id: i32,
        related_id: i32,
        attrs: &S::Attrs,
    ) -> Result<S::Link, ServiceError> {
        self.require_subject(subject_id).await?;
        self.require_related(related_id).await?;
        let link = self
            .store
            .links_for_pair(&self.db, subject_id, related_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| self.link_missing())?;
        self.store.validate(attrs)?;
        self.store.overwrite(&self.db, link, attrs).await
    }

    pub async fn remove(&self, subject_id: i32, related_id: i32) -> Result<(), ServiceError> {
        self.require_subject(subject_id).await?;
        self.require_related(related_id).await?;
        let link = self
            .store
            .links_for_pair(&self.db, subject_id, related_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| self.link_missing())?;
        self.store.delete(&self.db, link).await
    }
}
