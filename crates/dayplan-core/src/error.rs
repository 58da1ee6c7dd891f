//! Error types for the dayplan library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all scheduling operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Malformed or incomplete partition parameters
    #[error("Invalid request for field '{field}': {reason}")]
    InvalidRequest { field: String, reason: String },
    /// No feasible partition fits the window
    #[error("Window is overconstrained: {reason}")]
    OverconstrainedWindow { reason: String },
    /// Reorder index outside the schedule
    #[error("Index {index} is out of range for a schedule of {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },
    /// Block not found for the given ID
    #[error("Block with ID {id} not found")]
    BlockNotFound { id: u64 },
    /// An edit was requested before any schedule was generated
    #[error("No schedule has been generated yet")]
    NoSchedule,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating request validation errors.
pub struct InvalidRequestBuilder {
    field: String,
}

impl InvalidRequestBuilder {
    /// Create a new invalid request error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidRequest {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for request validation errors.
    pub fn invalid_request(field: impl Into<String>) -> InvalidRequestBuilder {
        InvalidRequestBuilder::new(field)
    }

    /// Creates an overconstrained-window error.
    pub fn overconstrained(reason: impl Into<String>) -> Self {
        Self::OverconstrainedWindow {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the
    /// environment.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. }
                | Self::OverconstrainedWindow { .. }
                | Self::IndexOutOfRange { .. }
                | Self::BlockNotFound { .. }
                | Self::NoSchedule
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to ScheduleError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazy context to any error type, converting to ScheduleError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ScheduleError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| ScheduleError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
