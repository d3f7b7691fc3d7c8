//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic validation failure: the caller supplied
/// something the model refuses, and must retry with a corrected value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value had the wrong type (e.g. a number where a string is expected).
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// A value had the right type but failed a constraint (empty, too long, ...).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_type(msg: impl Into<String>) -> Self {
        Self::InvalidType(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Stable machine-readable code (used in JSON error bodies).
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidType(_) => "invalid_type",
            DomainError::InvalidValue(_) => "invalid_value",
            DomainError::InvalidId(_) => "invalid_id",
        }
    }

    /// The human-readable detail without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidType(msg)
            | DomainError::InvalidValue(msg)
            | DomainError::InvalidId(msg) => msg,
        }
    }
}
