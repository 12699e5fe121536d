//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record arrived without any usable identifier.
    #[error("missing identifier in {0}")]
    MissingIdentifier(&'static str),

    /// The role string is not one of the known roles.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A swap request draft failed validation.
    #[error("invalid swap request: {0}")]
    InvalidSwapRequest(String),

    /// A credential value is empty or otherwise unusable.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
