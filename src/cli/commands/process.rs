//! Process command implementation
//!
//! This module implements the `process` command for anonymizing a local
//! file without going through the queue.

use crate::config::{load_config, VeilConfig};
use crate::core::engine::AnonymizationEngine;
use crate::domain::infer_content_type;
use clap::Args;
use std::path::Path;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Path to the file to anonymize
    pub input: String,

    /// Content type of the input (inferred from the extension when omitted)
    #[arg(long, value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Write the anonymized JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Processing local file");

        // A missing configuration file is fine here: process only needs the
        // schema and generator sections, which have usable defaults.
        let config = if Path::new(config_path).exists() {
            match load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    println!("❌ Failed to load configuration file");
                    println!("   Error: {e}");
                    return Ok(2); // Configuration error exit code
                }
            }
        } else {
            tracing::debug!(config_path, "No configuration file, using defaults");
            VeilConfig::default()
        };

        let engine = AnonymizationEngine::from_config(&config);

        let bytes = match tokio::fs::read(&self.input).await {
            Ok(bytes) => bytes,
            Err(e) => {
                println!("❌ Failed to read input file: {}", self.input);
                println!("   Error: {e}");
                return Ok(1); // Processing failure exit code
            }
        };

        let content_type = self
            .content_type
            .as_deref()
            .unwrap_or_else(|| infer_content_type(&self.input));

        let result = match engine.process(&bytes, content_type) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Anonymization failed");
                println!("   Error: {e}");
                return Ok(1); // Processing failure exit code
            }
        };

        let rendered = result.to_pretty_string()?;
        match &self.output {
            Some(path) => {
                if let Err(e) = tokio::fs::write(path, rendered.as_bytes()).await {
                    println!("❌ Failed to write output file: {path}");
                    println!("   Error: {e}");
                    return Ok(5); // Fatal error exit code
                }
                println!("✅ Anonymized output written: {path}");
            }
            None => {
                println!("{rendered}");
            }
        }

        println!();
        println!("📊 Anonymization Summary:");
        println!("  Format: {}", result.format);
        println!("  Replaced Values: {}", result.replaced_values);
        println!("  Processing Time: {}ms", result.processing_time_ms);

        Ok(0)
    }
}
