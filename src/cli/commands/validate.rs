//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Veil configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so success here means the
        // configuration is usable as-is.
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);

        if config.schema.enabled {
            println!("  Schema Validation: enabled");
            println!("  Required Fields: {:?}", config.schema.required);
        } else {
            println!("  Schema Validation: disabled");
        }

        match config.generator.seed {
            Some(seed) => println!("  Generator Seed: {seed}"),
            None => println!("  Generator Seed: entropy"),
        }

        println!("  Storage Backend: {:?}", config.storage.backend);
        if let Some(input_dir) = &config.storage.input_dir {
            println!("  Input Directory: {input_dir}");
        }
        if let Some(output_dir) = &config.storage.output_dir {
            println!("  Output Directory: {output_dir}");
        }

        println!("  Queue Backend: {:?}", config.queue.backend);
        if let Some(spool_dir) = &config.queue.spool_dir {
            println!("  Spool Directory: {spool_dir}");
        }

        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({} rotation)",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(0)
    }
}
