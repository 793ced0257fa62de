//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configured device index cannot identify any device.
    #[error("invalid device index: {0}")]
    InvalidDeviceIndex(i64),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
