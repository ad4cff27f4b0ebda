//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and storage layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Transport concerns (status codes, bodies) are mapped by the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced record does not exist in the relevant store.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// A filter or paging argument is out of its domain (e.g. a negative bound).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value failed validation (e.g. a non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<u64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
