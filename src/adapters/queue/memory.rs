//! In-memory work queue
//!
//! FIFO queue over a mutex-guarded deque, used by the memory backend and in
//! tests where spool-directory durability is not needed.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::adapters::queue::traits::WorkQueue;
use crate::domain::ids::FileRef;
use crate::domain::Result;

/// In-memory FIFO work queue
#[derive(Default)]
pub struct MemoryQueue {
    items: Mutex<VecDeque<FileRef>>,
}

impl MemoryQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkQueue for MemoryQueue {
    async fn enqueue(&self, file_ref: &FileRef) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        items.push_back(file_ref.clone());
        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<FileRef>> {
        let mut items = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(items.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_is_fifo() {
        let queue = MemoryQueue::new();
        queue
            .enqueue(&FileRef::new("incoming/a.json").unwrap())
            .await
            .unwrap();
        queue
            .enqueue(&FileRef::new("incoming/b.json").unwrap())
            .await
            .unwrap();

        assert_eq!(
            queue.dequeue().await.unwrap().unwrap().as_str(),
            "incoming/a.json"
        );
        assert_eq!(
            queue.dequeue().await.unwrap().unwrap().as_str(),
            "incoming/b.json"
        );
        assert!(queue.dequeue().await.unwrap().is_none());
    }
}
