//! Core business logic for Veil.
//!
//! This module contains the anonymization engine and the pipeline
//! orchestration built around it.
//!
//! # Modules
//!
//! - [`classify`] - Eligibility and token-shape rules for scalar values
//! - [`generator`] - Synthetic name generation behind the [`generator::NameGenerator`] trait
//! - [`schema`] - Declarative shape validation for structured documents
//! - [`transform`] - In-place structural rewriting of eligible values
//! - [`format`] - Structured and tabular payload parsing
//! - [`engine`] - The [`engine::AnonymizationEngine`] composing the stages above
//! - [`pipeline`] - Queue-driven worker, submission, and status reporting
//!
//! # Pipeline Workflow
//!
//! The typical asynchronous flow:
//!
//! 1. **Submit**: a validated file reference is enqueued
//! 2. **Drain**: the worker takes references off the queue
//! 3. **Fetch**: payload bytes and content type come from the byte source
//! 4. **Anonymize**: the engine parses, validates, and transforms
//! 5. **Store**: output lands in the byte sink under the object key
//! 6. **Poll**: clients ask for status until the output is ready
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use veil::adapters::queue::MemoryQueue;
//! use veil::adapters::storage::MemoryObjectStore;
//! use veil::core::engine::AnonymizationEngine;
//! use veil::core::generator::FakeNameGenerator;
//! use veil::core::pipeline::PipelineWorker;
//! use veil::core::schema::ValidationSchema;
//! use veil::domain::FileRef;
//!
//! # async fn example() -> veil::domain::Result<()> {
//! let engine = Arc::new(AnonymizationEngine::new(
//!     Some(ValidationSchema::person_record()),
//!     Arc::new(FakeNameGenerator::new()),
//! ));
//! let store = Arc::new(MemoryObjectStore::new());
//! let queue = Arc::new(MemoryQueue::new());
//! let worker = PipelineWorker::new(engine, store.clone(), store, queue);
//!
//! let file_ref = FileRef::new("incoming/records.json")
//!     .map_err(veil::domain::VeilError::Other)?;
//! worker.submit(&file_ref).await?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let summary = worker.drain(shutdown_rx).await?;
//! println!("Processed: {}", summary.total_messages);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod engine;
pub mod format;
pub mod generator;
pub mod pipeline;
pub mod schema;
pub mod transform;
