//! Work queue trait
//!
//! Contract for handing file references from submitters to workers.

use async_trait::async_trait;

use crate::domain::ids::FileRef;
use crate::domain::Result;

/// Queue of file references awaiting processing
///
/// Implementations must be safe to share across async task boundaries.
#[async_trait]
pub trait WorkQueue: Send + Sync {
    /// Add a file reference to the back of the queue.
    ///
    /// # Arguments
    /// * `file_ref` - Reference to the uploaded file to process
    ///
    /// # Errors
    /// Returns [`QueueError::Unavailable`](crate::domain::errors::QueueError)
    /// if the queue backend cannot accept the message.
    async fn enqueue(&self, file_ref: &FileRef) -> Result<()>;

    /// Take the oldest file reference off the queue.
    ///
    /// Returns `Ok(None)` when the queue is empty. A message that cannot be
    /// decoded is removed from the queue and reported as
    /// [`QueueError::Malformed`](crate::domain::errors::QueueError), so a
    /// single bad message never blocks the ones behind it.
    async fn dequeue(&self) -> Result<Option<FileRef>>;
}
