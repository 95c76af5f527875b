//! Storage abstraction traits
//!
//! This module defines the traits the pipeline uses to talk to object
//! storage. The source side serves uploaded files; the sink side holds
//! anonymized output and answers readiness probes.

use async_trait::async_trait;

use crate::domain::document::StoredObject;
use crate::domain::ids::FileRef;
use crate::domain::Result;

/// Byte source trait for uploaded files
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Fetch the bytes and content type for a file reference
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`](crate::domain::StorageError::NotFound)
    /// when the reference points at nothing, and
    /// [`StorageError::Unavailable`](crate::domain::StorageError::Unavailable)
    /// when the store cannot be reached.
    async fn fetch(&self, file_ref: &FileRef) -> Result<StoredObject>;
}

/// Byte sink trait for anonymized output
#[async_trait]
pub trait ByteSink: Send + Sync {
    /// Store output bytes under a key
    ///
    /// # Arguments
    ///
    /// * `key` - Object key, the final segment of the source reference
    /// * `bytes` - Serialized output document
    /// * `content_type` - Content type recorded with the object
    ///
    /// # Errors
    ///
    /// Returns an error if the object cannot be written.
    async fn store(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Check whether an object exists under a key
    ///
    /// `Ok(true)` and `Ok(false)` are both ordinary answers; an error means
    /// the store could not be asked.
    async fn exists(&self, key: &str) -> Result<bool>;
}
