//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VeilConfig;
use crate::domain::errors::VeilError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into VeilConfig
/// 4. Applies environment variable overrides (VEIL_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use veil::config::loader::load_config;
///
/// let config = load_config("veil.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VeilConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VeilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VeilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VeilConfig = toml::from_str(&contents)
        .map_err(|e| VeilError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        VeilError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are collected
/// and reported together.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| VeilError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VeilError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the VEIL_* prefix
///
/// Environment variables follow the pattern: VEIL_<SECTION>_<KEY>
/// For example: VEIL_STORAGE_INPUT_DIR, VEIL_QUEUE_BACKEND
fn apply_env_overrides(config: &mut VeilConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("VEIL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Schema overrides
    if let Ok(val) = std::env::var("VEIL_SCHEMA_ENABLED") {
        config.schema.enabled = val.parse().unwrap_or(true);
    }

    // Generator overrides
    if let Ok(val) = std::env::var("VEIL_GENERATOR_SEED") {
        if let Ok(seed) = val.parse() {
            config.generator.seed = Some(seed);
        }
    }

    // Storage overrides
    if let Ok(val) = std::env::var("VEIL_STORAGE_BACKEND") {
        if let Ok(backend) = val.parse() {
            config.storage.backend = backend;
        }
    }
    if let Ok(val) = std::env::var("VEIL_STORAGE_INPUT_DIR") {
        config.storage.input_dir = Some(val);
    }
    if let Ok(val) = std::env::var("VEIL_STORAGE_OUTPUT_DIR") {
        config.storage.output_dir = Some(val);
    }

    // Queue overrides
    if let Ok(val) = std::env::var("VEIL_QUEUE_BACKEND") {
        if let Ok(backend) = val.parse() {
            config.queue.backend = backend;
        }
    }
    if let Ok(val) = std::env::var("VEIL_QUEUE_SPOOL_DIR") {
        config.queue.spool_dir = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

/// Sample configuration written by `veil init`
pub fn sample_config() -> &'static str {
    r#"# Veil pipeline configuration

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[schema]
# Validate structured documents before anonymizing them.
enabled = true
# Fields that must be present, checked in the order listed.
required = ["name", "email", "age"]

# Expected value kind per field: string, integer, number, boolean, null.
[schema.fields]
name = "string"
email = "string"
age = "integer"

[generator]
# Uncomment for reproducible synthetic values.
# seed = 42

[storage]
# Storage backend: filesystem or memory.
backend = "filesystem"
input_dir = "./data/input"
output_dir = "./data/output"

[queue]
# Queue backend: filesystem or memory.
backend = "filesystem"
spool_dir = "./data/queue"

[logging]
# Write JSON logs to rotating files in addition to the console.
local_enabled = false
local_path = "./logs"
# Rotation: daily or hourly.
local_rotation = "daily"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{QueueBackend, StorageBackend};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("VEIL_TEST_SUBST_VAR", "test_value");
        let input = "input_dir = \"${VEIL_TEST_SUBST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "input_dir = \"test_value\"\n");
        std::env::remove_var("VEIL_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("VEIL_TEST_MISSING_VAR");
        let input = "input_dir = \"${VEIL_TEST_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("VEIL_TEST_COMMENTED_VAR");
        let input = "# input_dir = \"${VEIL_TEST_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${VEIL_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[storage]
backend = "filesystem"
input_dir = "./uploads"
output_dir = "./anonymized"

[queue]
backend = "memory"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.storage.backend, StorageBackend::Filesystem);
        assert_eq!(config.storage.input_dir.as_deref(), Some("./uploads"));
        assert_eq!(config.queue.backend, QueueBackend::Memory);
        assert!(config.queue.spool_dir.is_none());
        assert!(config.schema.enabled);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let toml_content = r#"
[application]
log_level = "verbose"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("log_level"));
    }

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: VeilConfig = toml::from_str(sample_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.input_dir.as_deref(), Some("./data/input"));
        assert_eq!(config.queue.spool_dir.as_deref(), Some("./data/queue"));
        assert!(config.schema.to_validation_schema().is_some());
    }
}
