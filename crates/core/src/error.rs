//! Errors raised by executables.
//!
//! Statements and groups report connectivity or statement faults as an
//! [`ExecutionError`]. The dispatcher never catches or translates them; they
//! reach the caller of the proxied method unchanged.

use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for executable operations
pub type ExecResult<T> = std::result::Result<T, ExecutionError>;

/// Fault raised inside a statement or group.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExecutionError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ExecutionError {
    /// Create an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The entry point is not supported by this executable.
    pub fn unsupported(operation: &str, executable: &str) -> Self {
        Self::new(format!("{} does not support {}", executable, operation))
    }

    /// The error message, without the source chain.
    pub fn message(&self) -> &str {
        &self.message
    }
}
