//! Typed error enum for the service layer.

use ironlog_core::ValidationError;
use ironlog_storage::StorageError;
use thiserror::Error;

/// Service-layer error separating caller mistakes from store failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, blocking task).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (bad date, empty exercise, bad sets, bad id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error was caused by the caller's input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
