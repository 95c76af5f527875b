//! Submit command implementation
//!
//! This module implements the `submit` command for queueing an uploaded
//! file for anonymization.

use crate::config::load_config;
use crate::core::pipeline::PipelineWorker;
use crate::domain::FileRef;
use clap::Args;

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Reference to the uploaded file, relative to the input root
    pub file_ref: String,
}

impl SubmitArgs {
    /// Execute the submit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file_ref = %self.file_ref, "Submitting file for anonymization");

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

        match worker.submit(&file_ref).await {
            Ok(()) => {
                println!("✅ Queued for anonymization: {file_ref}");
                println!("   Check progress with: veil status {file_ref}");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to queue file");
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
    fn test_submit_args_creation() {
        let args = SubmitArgs {
            file_ref: "incoming/people.json".to_string(),
        };
        assert_eq!(args.file_ref, "incoming/people.json");
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_reference() {
        let args = SubmitArgs {
            file_ref: "/absolute/path.json".to_string(),
        };
        let code = args.execute("definitely-no-config.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
