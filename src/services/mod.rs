//! Service functions coordinating validation, mapping and persistence.
//!
//! Every mutation validates its payload first; a payload that fails never
//! reaches a mapper or the repository.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::VocabularyError;
use crate::repository::errors::RepositoryError;

pub mod catalogo;
pub mod cliente;
pub mod equipo;
pub mod orden;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("entity not found")]
    NotFound,

    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[cfg(feature = "server")]
    #[error("storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
