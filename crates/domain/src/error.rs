//! Domain error types

use thiserror::Error;

/// Errors raised while constructing or parsing suite data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not one the suite supports.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A status string did not name a known pet or order status.
    #[error("unknown status value: {0}")]
    UnknownStatus(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
