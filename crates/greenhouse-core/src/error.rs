//! Error types for the greenhouse library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by every store and greenhouse operation.
#[derive(Error, Debug)]
pub enum GreenhouseError {
    /// Database connection, transaction or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plant not found for the given ID
    #[error("Plant with ID {id} not found")]
    PlantNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
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

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GreenhouseError {
        GreenhouseError::Database {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> GreenhouseError {
        GreenhouseError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GreenhouseError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when the error means the requested plant does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlantNotFound { .. })
    }

    /// Returns true for caller-side validation failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Serialization { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GreenhouseError::database(message).with_source(e))
    }
}

/// Result type alias for greenhouse operations
pub type Result<T> = std::result::Result<T, GreenhouseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = GreenhouseError::PlantNotFound { id: 42 };
        assert_eq!(err.to_string(), "Plant with ID 42 not found");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = GreenhouseError::invalid_input("name").with_reason("must not be blank");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be blank"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load plant").unwrap_err();
        assert!(matches!(err, GreenhouseError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to load plant");
    }
}
