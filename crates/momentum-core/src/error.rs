//! Core error types for momentum-core.
//!
//! Every fallible engine operation returns [`CoreError`]. The category enums
//! below carry the detail and convert into it with `?`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for momentum-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// User-supplied input was rejected before any state changed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import document could not be decoded
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// The durable store refused a read or write
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lookup of a catalog item by id failed
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field was empty or whitespace-only
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Numeric field must be greater than zero
    #[error("'{field}' must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Import document errors.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Document is not parseable JSON
    #[error("document is not valid JSON: {0}")]
    Unparseable(String),

    /// Document parsed but is not a JSON object
    #[error("document must be a JSON object")]
    NotAnObject,

    /// A recognized key holds a value of the wrong shape
    #[error("field '{field}' has an incompatible shape: {message}")]
    Field { field: &'static str, message: String },
}

/// Durable store errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to read a slot
    #[error("Failed to read slot '{slot}': {message}")]
    ReadFailed { slot: String, message: String },

    /// The store refused a write; in-memory state is still current
    #[error("Failed to write slot '{slot}': {message}")]
    WriteFailed { slot: String, message: String },

    /// A slot value could not be encoded
    #[error("Failed to encode slot '{slot}': {message}")]
    Encode { slot: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

impl ValidationError {
    /// Reject `text` if it trims to empty, returning the trimmed text otherwise.
    pub fn require_text<'a>(field: &'static str, text: &'a str) -> Result<&'a str, Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Err(ValidationError::EmptyField { field })
        } else {
            Ok(trimmed)
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
