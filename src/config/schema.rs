//! Configuration schema types
//!
//! This module defines the configuration structure mapped from `veil.toml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::schema::{FieldKind, ValidationSchema};

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Directory-backed object store
    #[default]
    Filesystem,
    /// In-memory object store
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filesystem" => Ok(StorageBackend::Filesystem),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "Invalid storage backend '{other}'. Must be one of: filesystem, memory"
            )),
        }
    }
}

/// Queue backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueueBackend {
    /// Spool-directory queue
    #[default]
    Filesystem,
    /// In-memory queue
    Memory,
}

impl std::str::FromStr for QueueBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filesystem" => Ok(QueueBackend::Filesystem),
            "memory" => Ok(QueueBackend::Memory),
            other => Err(format!(
                "Invalid queue backend '{other}'. Must be one of: filesystem, memory"
            )),
        }
    }
}

/// Main Veil configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional; an absent section takes the conventional
/// local defaults (`./data/input`, `./data/output`, `./data/queue`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VeilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Schema validation applied to structured documents
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Synthetic value generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Object storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Work queue configuration
    #[serde(default)]
    pub queue: QueueConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VeilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.schema.validate()?;
        self.storage.validate()?;
        self.queue.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Schema validation configuration
///
/// The default shape matches the person records the pipeline was built
/// around: `name` and `email` strings plus an integer `age`, all required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Whether structured documents are validated before transformation
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Field names that must be present, checked in the order listed
    #[serde(default = "default_schema_required")]
    pub required: Vec<String>,

    /// Expected value kind per field name
    #[serde(default = "default_schema_fields")]
    pub fields: BTreeMap<String, FieldKind>,
}

impl SchemaConfig {
    /// Builds the validation schema, or `None` when validation is disabled.
    pub fn to_validation_schema(&self) -> Option<ValidationSchema> {
        if !self.enabled {
            return None;
        }

        let mut schema = ValidationSchema::new();
        for field in &self.required {
            schema = schema.require_presence(field);
        }
        for (field, kind) in &self.fields {
            schema = schema.declare(field, *kind);
        }
        Some(schema)
    }

    fn validate(&self) -> Result<(), String> {
        if self.required.iter().any(|f| f.trim().is_empty()) {
            return Err("schema.required cannot contain empty field names".to_string());
        }
        if self.fields.keys().any(|f| f.trim().is_empty()) {
            return Err("schema.fields cannot contain empty field names".to_string());
        }
        Ok(())
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            required: default_schema_required(),
            fields: default_schema_fields(),
        }
    }
}

/// Synthetic value generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Seed for reproducible synthetic values (omit for entropy-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Object storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend (filesystem or memory)
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory uploads are read from (required if backend = filesystem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,

    /// Directory anonymized output is written to (required if backend = filesystem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.backend == StorageBackend::Filesystem {
            if self.input_dir.as_deref().unwrap_or("").is_empty() {
                return Err(
                    "storage.input_dir is required when storage.backend = 'filesystem'"
                        .to_string(),
                );
            }
            if self.output_dir.as_deref().unwrap_or("").is_empty() {
                return Err(
                    "storage.output_dir is required when storage.backend = 'filesystem'"
                        .to_string(),
                );
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Filesystem,
            input_dir: Some(default_input_dir()),
            output_dir: Some(default_output_dir()),
        }
    }
}

/// Work queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Queue backend (filesystem or memory)
    #[serde(default)]
    pub backend: QueueBackend,

    /// Directory queue messages are spooled into (required if backend = filesystem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spool_dir: Option<String>,
}

impl QueueConfig {
    fn validate(&self) -> Result<(), String> {
        if self.backend == QueueBackend::Filesystem
            && self.spool_dir.as_deref().unwrap_or("").is_empty()
        {
            return Err(
                "queue.spool_dir is required when queue.backend = 'filesystem'".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            backend: QueueBackend::Filesystem,
            spool_dir: Some(default_spool_dir()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_schema_required() -> Vec<String> {
    vec!["name".to_string(), "email".to_string(), "age".to_string()]
}

fn default_schema_fields() -> BTreeMap<String, FieldKind> {
    BTreeMap::from([
        ("name".to_string(), FieldKind::String),
        ("email".to_string(), FieldKind::String),
        ("age".to_string(), FieldKind::Integer),
    ])
}

fn default_input_dir() -> String {
    "./data/input".to_string()
}

fn default_output_dir() -> String {
    "./data/output".to_string()
}

fn default_spool_dir() -> String {
    "./data/queue".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let config = VeilConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.storage.backend, StorageBackend::Filesystem);
        assert_eq!(config.storage.input_dir.as_deref(), Some("./data/input"));
        assert_eq!(config.queue.spool_dir.as_deref(), Some("./data/queue"));
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_filesystem_storage_requires_directories() {
        let mut config = StorageConfig {
            backend: StorageBackend::Filesystem,
            input_dir: Some("./in".to_string()),
            output_dir: None,
        };
        assert!(config.validate().is_err());

        config.output_dir = Some("./out".to_string());
        assert!(config.validate().is_ok());

        config.backend = StorageBackend::Memory;
        config.input_dir = None;
        config.output_dir = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filesystem_queue_requires_spool_dir() {
        let mut config = QueueConfig {
            backend: QueueBackend::Filesystem,
            spool_dir: None,
        };
        assert!(config.validate().is_err());

        config.spool_dir = Some("./queue".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_rotation_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "hourly".to_string();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_schema_matches_person_records() {
        let config = SchemaConfig::default();
        let schema = config.to_validation_schema().unwrap();

        assert_eq!(schema.required_fields(), ["name", "email", "age"]);
        assert!(schema
            .validate(&json!({"name": "Ann", "email": "a@b.c", "age": 30}))
            .is_ok());
        assert!(schema.validate(&json!({"name": "Ann", "age": 30})).is_err());
    }

    #[test]
    fn test_disabled_schema_yields_none() {
        let config = SchemaConfig {
            enabled: false,
            ..SchemaConfig::default()
        };
        assert!(config.to_validation_schema().is_none());
    }

    #[test]
    fn test_schema_config_rejects_empty_field_names() {
        let config = SchemaConfig {
            enabled: true,
            required: vec!["".to_string()],
            fields: BTreeMap::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!(
            "filesystem".parse::<StorageBackend>().unwrap(),
            StorageBackend::Filesystem
        );
        assert_eq!(
            "MEMORY".parse::<QueueBackend>().unwrap(),
            QueueBackend::Memory
        );
        assert!("redis".parse::<StorageBackend>().is_err());
    }
}
