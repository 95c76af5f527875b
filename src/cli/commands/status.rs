//! Status command implementation
//!
//! This module implements the `status` command for reporting whether
//! anonymized output exists for a submitted file.

use crate::config::load_config;
use crate::core::pipeline::PipelineWorker;
use crate::domain::{FileRef, ProcessingStatus};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Reference to the uploaded file, relative to the input root
    pub file_ref: String,
}

impl StatusArgs {
    /// Execute the status command
    ///
    /// Both `ready` and `not_ready` exit 0; not-ready is an ordinary answer
    /// for a file still in the queue.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file_ref = %self.file_ref, "Checking processing status");

        let file_ref = match FileRef::new(&self.file_ref) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Invalid file reference: {}", self.file_ref);
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let worker = match PipelineWorker::from_config(&config) {
            Ok(w) => w,
            Err(e) => {
                println!("❌ Failed to initialize pipeline");
                println!("   Error: {e}");
                return Ok(4); // Connectivity error exit code
            }
        };

        match worker.status(&file_ref).await {
            Ok(status) => {
                println!("{status}");
                match status {
                    ProcessingStatus::Ready => {
                        println!("✅ Anonymized output is available: {}", file_ref.object_key());
                    }
                    ProcessingStatus::NotReady => {
                        println!("⏳ Not processed yet. Submit it or wait for a worker.");
                    }
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to check status");
                println!("   Error: {e}");
                Ok(4) // Connectivity error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_args_creation() {
        let args = StatusArgs {
            file_ref: "incoming/people.json".to_string(),
        };
        assert_eq!(args.file_ref, "incoming/people.json");
    }

    #[tokio::test]
    async fn test_status_rejects_invalid_reference() {
        let args = StatusArgs {
            file_ref: "  ".to_string(),
        };
        let code = args.execute("definitely-no-config.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
