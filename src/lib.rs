// Veil - File Anonymization Pipeline
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - File Anonymization Pipeline
//!
//! Veil is an asynchronous pipeline that removes personal names from
//! uploaded JSON and CSV files, replacing them with synthetic ones while
//! preserving document structure.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** structured documents against a configurable schema
//! - **Classifying** which values look like personal names
//! - **Replacing** eligible values with synthetic names, in place
//! - **Queueing** uploaded files and draining them through a worker
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (classify, schema, transform, engine, pipeline)
//! - [`adapters`] - Storage and queue backends
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::config::VeilConfig;
//! use veil::core::engine::AnonymizationEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = AnonymizationEngine::from_config(&VeilConfig::default());
//!
//! let input = br#"{"name": "Maria Rossi", "email": "maria@example.com", "age": 41}"#;
//! let result = engine.process(input, "application/json")?;
//!
//! println!("Replaced {} values", result.replaced_values);
//! println!("{}", result.to_pretty_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## The Pipeline
//!
//! Uploads are referenced by queue messages and processed asynchronously:
//!
//! ```rust,no_run
//! use tokio::sync::watch;
//! use veil::config::load_config;
//! use veil::core::pipeline::PipelineWorker;
//! use veil::domain::FileRef;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//! let worker = PipelineWorker::from_config(&config)?;
//!
//! let file_ref = FileRef::new("incoming/people.json")?;
//! worker.submit(&file_ref).await?;
//!
//! let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//! let summary = worker.drain(shutdown_rx).await?;
//! println!("Anonymized {} files", summary.succeeded);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Veil uses the [`domain::VeilError`] type for all errors. Each error
//! classifies itself as a client fault (bad input) or a server fault
//! (broken environment):
//!
//! ```rust
//! use veil::domain::{ErrorClass, FormatError, VeilError};
//!
//! let err = VeilError::from(FormatError::Unsupported("image/png".to_string()));
//! assert_eq!(err.class(), ErrorClass::Client);
//! ```
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting worker");
//! warn!(file_ref = "incoming/people.json", "File could not be fetched");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
