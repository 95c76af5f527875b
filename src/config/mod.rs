//! Configuration management for Veil.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Veil uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`VEIL_*` prefix)
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("veil.toml")?;
//!
//! // Access configuration sections
//! println!("Storage backend: {:?}", config.storage.backend);
//! if let Some(input_dir) = &config.storage.input_dir {
//!     println!("Reading uploads from: {input_dir}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [schema]
//! enabled = true
//! required = ["name", "email", "age"]
//!
//! [schema.fields]
//! name = "string"
//! email = "string"
//! age = "integer"
//!
//! [storage]
//! backend = "filesystem"
//! input_dir = "./data/input"
//! output_dir = "./data/output"
//!
//! [queue]
//! backend = "filesystem"
//! spool_dir = "./data/queue"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, sample_config};
pub use schema::{
    ApplicationConfig, GeneratorConfig, LoggingConfig, QueueBackend, QueueConfig, SchemaConfig,
    StorageBackend, StorageConfig, VeilConfig,
};
