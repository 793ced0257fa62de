//! Application error types

use thiserror::Error;

/// The host GUI/windowing subsystem cannot be used.
///
/// Not recoverable within a run: the bootstrap surfaces it as process
/// termination with a non-zero status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("platform error: {message}")]
pub struct PlatformError {
    message: String,
}

impl PlatformError {
    /// Creates a platform error from a backend message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the backend message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_display() {
        let err = PlatformError::new("no display found");
        assert_eq!(err.to_string(), "platform error: no display found");
        assert_eq!(err.message(), "no display found");
    }
}
