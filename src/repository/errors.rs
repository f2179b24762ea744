//! Error taxonomy of the persistence layer.

use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::VocabularyError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    /// A stored value violated a schema constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored value could not be read back into the domain vocabulary.
    #[error("invalid stored value: {0}")]
    InvalidValue(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            DieselError::DatabaseError(_, info) => {
                RepositoryError::Database(info.message().to_string())
            }
            DieselError::SerializationError(e) => RepositoryError::InvalidValue(e.to_string()),
            DieselError::DeserializationError(e) => RepositoryError::InvalidValue(e.to_string()),
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<VocabularyError> for RepositoryError {
    fn from(err: VocabularyError) -> Self {
        RepositoryError::InvalidValue(err.to_string())
    }
}
