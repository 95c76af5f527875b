//! Domain error types
//!
//! This module defines the error hierarchy for Veil. All errors are
//! domain-specific and don't expose third-party types. Every error maps onto
//! a coarse [`ErrorClass`] so invokers can distinguish problems with the
//! submitted file from problems with the environment.

use std::fmt;

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Schema validation failures
    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaViolation),

    /// Payload format errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Object storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Work queue errors
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Coarse error classification for pipeline invokers
///
/// `Client` errors are caused by the submitted file or the request itself;
/// resubmitting the same input will fail again. `Server` errors are
/// environmental and may clear on a later attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The submitted input is at fault
    Client,
    /// A dependency or the environment is at fault
    Server,
}

impl VeilError {
    /// Classifies the error for invokers.
    pub fn class(&self) -> ErrorClass {
        match self {
            VeilError::Configuration(_) | VeilError::Schema(_) | VeilError::Format(_) => {
                ErrorClass::Client
            }
            VeilError::Storage(_)
            | VeilError::Queue(_)
            | VeilError::Serialization(_)
            | VeilError::Io(_)
            | VeilError::Other(_) => ErrorClass::Server,
        }
    }
}

/// A single schema validation failure
///
/// Validation stops at the first violation, so one `SchemaViolation`
/// describes the whole outcome of a failed validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {reason}")]
pub struct SchemaViolation {
    /// Name of the offending field (`$` for the document root)
    pub field: String,

    /// Why the field was rejected
    pub reason: ViolationReason,
}

impl SchemaViolation {
    /// A required field is absent from the document.
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: ViolationReason::Missing,
        }
    }

    /// A declared field is present with the wrong kind of value.
    pub fn wrong_type(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: ViolationReason::WrongType,
        }
    }
}

/// Reason a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    /// Required field absent from the document
    Missing,

    /// Declared field present with a different kind
    WrongType,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationReason::Missing => write!(f, "missing"),
            ViolationReason::WrongType => write!(f, "wrong_type"),
        }
    }
}

/// Payload format errors
///
/// Raised by the format adapter when the declared format is unknown or the
/// payload bytes don't parse as the declared format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The format signal names no supported format
    #[error("Unsupported format: {0}")]
    Unsupported(String),

    /// The payload doesn't parse as the declared format
    #[error("Malformed input: {0}")]
    Malformed(String),
}

/// Object storage errors
///
/// Errors from the byte source and byte sink collaborators. The not-found
/// case is distinct so callers can tell a missing object from an unreachable
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Referenced object does not exist
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Store could not be reached or refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Work queue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Queue could not be reached or refused the operation
    #[error("Queue unavailable: {0}")]
    Unavailable(String),

    /// A queued message could not be decoded
    #[error("Malformed message: {0}")]
    Malformed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
