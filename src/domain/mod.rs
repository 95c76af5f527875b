//! Domain models and types for Veil.
//!
//! This module contains the core domain models, types, and business rules
//! shared by the anonymization engine, the pipeline, and the adapters.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed file references** ([`FileRef`])
//! - **Document shapes** ([`TabularDocument`], [`Column`], [`StoredObject`])
//! - **Format and status signals** ([`PayloadFormat`], [`ProcessingStatus`])
//! - **Error types** ([`VeilError`] and its per-concern sub-errors)
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Veil uses the newtype pattern for file references so an unvalidated
//! string can never reach storage or queue code:
//!
//! ```rust
//! use veil::domain::FileRef;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let file_ref = FileRef::new("incoming/2024/records.json")?;
//! assert_eq!(file_ref.object_key(), "records.json");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VeilError>`], and every error
//! classifies itself for invokers:
//!
//! ```rust
//! use veil::domain::{ErrorClass, FormatError, VeilError};
//!
//! let err = VeilError::from(FormatError::Unsupported("text/plain".into()));
//! assert_eq!(err.class(), ErrorClass::Client);
//! ```

pub mod document;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use document::{
    infer_content_type, Column, PayloadFormat, ProcessingStatus, StoredObject, TabularDocument,
};
pub use errors::{
    ErrorClass, FormatError, QueueError, SchemaViolation, StorageError, VeilError, ViolationReason,
};
pub use ids::FileRef;
pub use result::Result;
