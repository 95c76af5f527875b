//! Main anonymization engine
//!
//! This module provides the core [`AnonymizationEngine`] that turns raw
//! payload bytes into an anonymized, record-oriented JSON document.
//!
//! # Architecture
//!
//! The engine composes three stages:
//! - **Format adapter**: parses bytes according to the declared content type
//! - **Schema validator**: checks structured documents before any rewrite
//! - **Transformer**: replaces eligible string values with synthetic names
//!
//! The engine is synchronous and stateless across invocations; each call
//! parses, validates, and transforms one payload.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use veil::core::engine::AnonymizationEngine;
//! use veil::core::generator::FakeNameGenerator;
//! use veil::core::schema::ValidationSchema;
//!
//! # fn example() -> veil::domain::Result<()> {
//! let engine = AnonymizationEngine::new(
//!     Some(ValidationSchema::person_record()),
//!     Arc::new(FakeNameGenerator::with_seed(42)),
//! );
//!
//! let payload = br#"{"name": "John Smith", "email": "j@example.com", "age": 34}"#;
//! let result = engine.process(payload, "application/json")?;
//! assert_eq!(result.replaced_values, 2);
//! assert_eq!(result.document["age"], 34);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::VeilConfig;
use crate::core::format;
use crate::core::generator::{FakeNameGenerator, NameGenerator};
use crate::core::schema::ValidationSchema;
use crate::core::transform::Transformer;
use crate::domain::document::PayloadFormat;
use crate::domain::result::Result;

/// Outcome of one anonymization pass
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizationResult {
    /// Anonymized document in its record-oriented output shape
    pub document: Value,

    /// Format the payload was parsed as
    pub format: PayloadFormat,

    /// Number of values replaced (fields for structured payloads, cells for
    /// tabular ones)
    pub replaced_values: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Completion timestamp (UTC)
    pub completed_at: DateTime<Utc>,
}

impl AnonymizationResult {
    /// Serializes the anonymized document to output bytes.
    ///
    /// Output is always JSON, for tabular input as an array of row objects.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.document)?)
    }

    /// Pretty-printed document for console output.
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}

/// Main anonymization engine
///
/// # Thread Safety
///
/// The engine is thread-safe and can be shared across async tasks using
/// `Arc`; the generator is already behind one.
pub struct AnonymizationEngine {
    schema: Option<ValidationSchema>,
    transformer: Transformer,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Arguments
    ///
    /// * `schema` - Schema applied to structured payloads; `None` disables
    ///   validation
    /// * `generator` - Source of synthetic replacement values
    pub fn new(schema: Option<ValidationSchema>, generator: Arc<dyn NameGenerator>) -> Self {
        Self {
            schema,
            transformer: Transformer::new(generator),
        }
    }

    /// Create an engine from loaded configuration
    ///
    /// The schema comes from the `[schema]` section; the generator is seeded
    /// from `[generator] seed` when set, otherwise from OS entropy.
    pub fn from_config(config: &VeilConfig) -> Self {
        let generator: Arc<dyn NameGenerator> = match config.generator.seed {
            Some(seed) => Arc::new(FakeNameGenerator::with_seed(seed)),
            None => Arc::new(FakeNameGenerator::new()),
        };
        Self::new(config.schema.to_validation_schema(), generator)
    }

    /// Whether structured payloads are validated before transformation.
    pub fn validates_schema(&self) -> bool {
        self.schema.is_some()
    }

    /// Anonymize one payload
    ///
    /// Parses `bytes` according to `content_type`, validates structured
    /// documents against the schema, then replaces eligible values. Tabular
    /// results are converted to their record-oriented output shape.
    ///
    /// # Errors
    ///
    /// - [`FormatError::Unsupported`](crate::domain::FormatError) when the
    ///   content type names no supported format
    /// - [`FormatError::Malformed`](crate::domain::FormatError) when the
    ///   payload doesn't parse
    /// - [`SchemaViolation`](crate::domain::SchemaViolation) when a
    ///   structured document fails validation; nothing is transformed in
    ///   that case
    pub fn process(&self, bytes: &[u8], content_type: &str) -> Result<AnonymizationResult> {
        let start = Instant::now();
        let format = PayloadFormat::from_content_type(content_type)?;

        debug!(
            format = %format,
            payload_bytes = bytes.len(),
            "Processing payload"
        );

        let (document, replaced_values) = match format {
            PayloadFormat::Structured => {
                let mut document = format::parse_structured(bytes)?;
                if let Some(schema) = &self.schema {
                    schema.validate(&document)?;
                }
                let replaced = self.transformer.transform_document(&mut document);
                (document, replaced)
            }
            PayloadFormat::Tabular => {
                let mut table = format::parse_tabular(bytes)?;
                let replaced = self.transformer.transform_table(&mut table);
                (Value::Array(table.into_records()), replaced)
            }
        };

        let result = AnonymizationResult {
            document,
            format,
            replaced_values,
            processing_time_ms: start.elapsed().as_millis() as u64,
            completed_at: Utc::now(),
        };

        info!(
            format = %result.format,
            replaced = result.replaced_values,
            processing_time_ms = result.processing_time_ms,
            "Anonymization complete"
        );

        Ok(result)
    }
}
