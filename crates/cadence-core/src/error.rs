//! Error types for the cadence core library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all fallible cadence operations.
///
/// Planning anomalies (rejected step jumps, drops onto unknown containers,
/// dangling parent references, failed statement checks) are not errors and
/// never surface here. Only addressing a record that does not exist,
/// inserting a duplicate, or loading seed data can fail.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Backlog item not found for the given ID
    #[error("Backlog item with ID '{id}' not found")]
    ItemNotFound { id: String },
    /// Outcome not found for the given ID
    #[error("Outcome with ID '{id}' not found")]
    OutcomeNotFound { id: String },
    /// A record with the same ID already exists
    #[error("A {kind} with ID '{id}' already exists")]
    DuplicateId { kind: &'static str, id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Calendar arithmetic errors
    #[error("Date error: {0}")]
    Date(#[from] jiff::Error),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CadenceError {
        CadenceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CadenceError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub(crate) fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }

    pub(crate) fn outcome_not_found(id: impl Into<String>) -> Self {
        Self::OutcomeNotFound { id: id.into() }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to CadenceError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| CadenceError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;
