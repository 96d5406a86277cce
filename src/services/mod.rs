pub mod backup;
pub mod client;
pub mod process;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Errors surfaced by the workflow layer. None are fatal; every failure
/// degrades to a reported message with prior state retained.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// User input was insufficient; nothing was mutated. The message is
    /// ready for display.
    #[error("{0}")]
    Validation(String),

    /// The referenced client does not exist.
    #[error("Klien tidak ditemukan.")]
    NotFound,

    /// A backup document could not be parsed; nothing was applied.
    #[error("Gagal memuat data cadangan: {0}")]
    Import(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
