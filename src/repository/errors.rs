use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    /// The persistence mirror write failed. The in-memory collection keeps
    /// the mutation; callers should warn that it may not survive a reload.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<StorageError> for RepositoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(io) => RepositoryError::Persistence(io.to_string()),
            StorageError::Serde(serde) => RepositoryError::Serialization(serde.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}
