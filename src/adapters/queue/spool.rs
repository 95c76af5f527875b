//! Spool-directory work queue
//!
//! Durable queue backed by a directory of JSON message files. Each enqueue
//! writes one file whose name sorts in arrival order, so the oldest message
//! is always the lexicographically smallest name. Dequeue claims a message
//! by removing its file before decoding it, which keeps an undecodable
//! message from wedging the queue.
//!
//! Message names carry a millisecond timestamp and a process-local sequence
//! number, so ordering holds for a single submitting process. Run one worker
//! per spool directory; concurrent workers may race on the same message.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::adapters::queue::traits::WorkQueue;
use crate::domain::errors::QueueError;
use crate::domain::ids::FileRef;
use crate::domain::Result;

/// Tie-breaker for messages enqueued within the same millisecond
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Envelope persisted for each queued file reference
#[derive(Debug, Serialize, Deserialize)]
struct SpoolMessage {
    file_ref: FileRef,
    enqueued_at: DateTime<Utc>,
}

/// Directory-backed work queue
pub struct SpoolQueue {
    spool_dir: PathBuf,
}

impl SpoolQueue {
    /// Create a queue spooling messages into `spool_dir`
    pub fn new(spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
        }
    }

    fn next_message_name() -> String {
        let millis = Utc::now().timestamp_millis().max(0);
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed) % 1_000_000;
        format!("{millis:013}-{seq:06}-{}.json", Uuid::new_v4())
    }

    fn unavailable(err: std::io::Error) -> QueueError {
        QueueError::Unavailable(err.to_string())
    }

    /// Name of the oldest `.json` message in the spool, if any
    async fn oldest_message(&self) -> Result<Option<String>> {
        let mut entries = match tokio::fs::read_dir(&self.spool_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::unavailable(e).into()),
        };

        let mut oldest: Option<String> = None;
        while let Some(entry) = entries.next_entry().await.map_err(Self::unavailable)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(".json") {
                continue;
            }
            if oldest.as_deref().map(|o| name.as_str() < o).unwrap_or(true) {
                oldest = Some(name);
            }
        }
        Ok(oldest)
    }
}

#[async_trait]
impl WorkQueue for SpoolQueue {
    async fn enqueue(&self, file_ref: &FileRef) -> Result<()> {
        tokio::fs::create_dir_all(&self.spool_dir)
            .await
            .map_err(Self::unavailable)?;

        let message = SpoolMessage {
            file_ref: file_ref.clone(),
            enqueued_at: Utc::now(),
        };
        let bytes = serde_json::to_vec(&message)
            .map_err(|e| QueueError::Unavailable(format!("failed to encode message: {e}")))?;

        let name = Self::next_message_name();
        let path = self.spool_dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(Self::unavailable)?;

        debug!(file_ref = %file_ref, message = %name, "Spooled queue message");
        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<FileRef>> {
        let Some(name) = self.oldest_message().await? else {
            return Ok(None);
        };

        let path = self.spool_dir.join(&name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            // Another worker claimed it between listing and reading.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::unavailable(e).into()),
        };

        // Claim the message before decoding so a bad payload is consumed
        // rather than retried forever.
        tokio::fs::remove_file(&path)
            .await
            .map_err(Self::unavailable)?;

        let message: SpoolMessage = serde_json::from_slice(&bytes)
            .map_err(|e| QueueError::Malformed(format!("{name}: {e}")))?;

        debug!(file_ref = %message.file_ref, message = %name, "Claimed queue message");
        Ok(Some(message.file_ref))
    }
}
