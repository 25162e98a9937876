//! # Error Types
//!
//! Structured error types for ride_core. Only the I/O edges (catalog
//! loading, report export) produce errors: unparseable dimensions and
//! incomplete financial inputs are ordinary `None` values, never errors.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::errors::{RideError, RideResult};
//!
//! fn require_catalog(path: &str) -> RideResult<()> {
//!     if path.is_empty() {
//!         return Err(RideError::missing_field("catalog_path"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_catalog("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ride_core operations
pub type RideResult<T> = Result<T, RideError>;

/// Structured error type for catalog and report operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RideError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Configuration could not be read or is malformed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },
}

impl RideError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RideError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        RideError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        RideError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RideError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RideError::InvalidInput { .. } => "INVALID_INPUT",
            RideError::MissingField { .. } => "MISSING_FIELD",
            RideError::FileError { .. } => "FILE_ERROR",
            RideError::SerializationError { .. } => "SERIALIZATION_ERROR",
            RideError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for RideError {
    fn from(e: serde_json::Error) -> Self {
        RideError::SerializationError {
            reason: e.to_string(),
        }
    }
}
