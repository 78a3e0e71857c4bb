//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every variant is
/// recoverable by the caller supplying corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (blank field, malformed email, non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced record does not exist (e.g. an order for an unknown book).
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Human-readable reason without the category prefix.
    ///
    /// This is what a presentation layer shows next to the offending field.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::Validation(msg) | DomainError::NotFound(msg) => msg,
        }
    }
}
