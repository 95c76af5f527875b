//! In-memory object store
//!
//! Map-backed implementation of the storage traits used by the memory
//! backend and by tests. Fetches resolve against the full file reference,
//! stores and existence checks use the object key, mirroring how the
//! filesystem store separates input paths from output keys.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::adapters::storage::traits::{ByteSink, ByteSource};
use crate::domain::document::StoredObject;
use crate::domain::errors::StorageError;
use crate::domain::ids::FileRef;
use crate::domain::Result;

/// In-memory object store
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object under `key`, replacing any previous value
    pub fn insert(&self, key: impl Into<String>, bytes: Vec<u8>, content_type: &str) {
        let mut objects = self
            .objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        objects.insert(key.into(), StoredObject::new(bytes, content_type));
    }

    /// Look up an object by key
    pub fn get(&self, key: &str) -> Option<StoredObject> {
        let objects = self
            .objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        objects.get(key).cloned()
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        let objects = self
            .objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        objects.len()
    }

    /// Whether the store holds no objects
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ByteSource for MemoryObjectStore {
    async fn fetch(&self, file_ref: &FileRef) -> Result<StoredObject> {
        self.get(file_ref.as_str())
            .ok_or_else(|| StorageError::NotFound(file_ref.to_string()).into())
    }
}

#[async_trait]
impl ByteSink for MemoryObjectStore {
    async fn store(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        self.insert(key, bytes.to_vec(), content_type);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).is_some())
    }
}
