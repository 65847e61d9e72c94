use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PreconditionFailed(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("The {entity} with the given id was not found"))
    }

    /// A pure-link pair where both records exist but are not linked.
    pub fn not_associated(related: &str, subject: &str) -> Self {
        Self::PreconditionFailed(format!(
            "The {related} with the given id is not associated to the {subject}"
        ))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::BadRequest(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        Self::Db(e.to_string())
    }
}
