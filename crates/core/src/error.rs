//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only expected, input-driven failures live here. Anything unexpected is the
/// HTTP boundary's business (it becomes a generic 500).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. missing name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Human-readable detail without the variant prefix.
    ///
    /// Used by the HTTP layer, which reports the reason rather than the category.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
            Self::NotFound => "not found",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
