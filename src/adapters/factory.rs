//! Adapter factory
//!
//! Builds storage and queue adapters from configuration, returning them
//! behind trait objects so the pipeline never depends on a concrete backend.

use std::sync::Arc;

use tracing::info;

use crate::adapters::queue::{MemoryQueue, SpoolQueue, WorkQueue};
use crate::adapters::storage::{ByteSink, ByteSource, FsObjectStore, MemoryObjectStore};
use crate::config::{QueueBackend, QueueConfig, StorageBackend, StorageConfig};
use crate::domain::{Result, VeilError};

/// Create the byte source and sink selected by configuration.
///
/// Both trait objects are views of one underlying store, so files written
/// through the sink are observable through the same backend's source.
///
/// # Arguments
/// * `config` - Storage section of the application configuration
///
/// # Errors
/// Returns [`VeilError::Configuration`] if the filesystem backend is
/// selected without its directories.
pub fn create_object_store(
    config: &StorageConfig,
) -> Result<(Arc<dyn ByteSource>, Arc<dyn ByteSink>)> {
    match config.backend {
        StorageBackend::Filesystem => {
            let input_dir = config.input_dir.as_deref().ok_or_else(|| {
                VeilError::Configuration(
                    "storage.input_dir is required for the filesystem backend".to_string(),
                )
            })?;
            let output_dir = config.output_dir.as_deref().ok_or_else(|| {
                VeilError::Configuration(
                    "storage.output_dir is required for the filesystem backend".to_string(),
                )
            })?;

            info!(input_dir, output_dir, "Creating filesystem object store");
            let store = Arc::new(FsObjectStore::new(input_dir, output_dir));
            Ok((store.clone() as Arc<dyn ByteSource>, store as Arc<dyn ByteSink>))
        }
        StorageBackend::Memory => {
            info!("Creating in-memory object store");
            let store = Arc::new(MemoryObjectStore::new());
            Ok((store.clone() as Arc<dyn ByteSource>, store as Arc<dyn ByteSink>))
        }
    }
}

/// Create the work queue selected by configuration.
///
/// # Arguments
/// * `config` - Queue section of the application configuration
///
/// # Errors
/// Returns [`VeilError::Configuration`] if the filesystem backend is
/// selected without a spool directory.
pub fn create_work_queue(config: &QueueConfig) -> Result<Arc<dyn WorkQueue>> {
    match config.backend {
        QueueBackend::Filesystem => {
            let spool_dir = config.spool_dir.as_deref().ok_or_else(|| {
                VeilError::Configuration(
                    "queue.spool_dir is required for the filesystem backend".to_string(),
                )
            })?;

            info!(spool_dir, "Creating spool-directory work queue");
            Ok(Arc::new(SpoolQueue::new(spool_dir)))
        }
        QueueBackend::Memory => {
            info!("Creating in-memory work queue");
            Ok(Arc::new(MemoryQueue::new()))
        }
    }
}
