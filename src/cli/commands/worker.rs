//! Worker command implementation
//!
//! This module implements the `worker` command that drains the queue and
//! anonymizes the files it references.

use crate::config::load_config;
use crate::core::pipeline::{PipelineSummary, PipelineWorker};
use clap::Args;
use std::time::Duration;
use tokio::sync::watch;

/// Delay between polls once the queue has been drained
const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Arguments for the worker command
#[derive(Args, Debug)]
pub struct WorkerArgs {
    /// Exit after draining the current backlog instead of polling for more
    #[arg(long)]
    pub once: bool,
}

impl WorkerArgs {
    /// Execute the worker command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(once = self.once, "Starting worker");

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

        if self.once {
            println!("🚀 Draining queue...");
        } else {
            println!("🚀 Worker running, press Ctrl+C to stop...");
        }
        println!();

        let mut summary = PipelineSummary::new();
        loop {
            let pass = match worker.drain(shutdown.clone()).await {
                Ok(p) => p,
                Err(e) => {
                    tracing::error!(error = %e, "Queue drain failed");
                    eprintln!("Queue drain failed: {e}");
                    return Ok(5); // Fatal error exit code
                }
            };
            summary.merge(pass);

            if summary.interrupted || self.once {
                break;
            }

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        summary.mark_interrupted();
                        break;
                    }
                }
                _ = tokio::time::sleep(POLL_INTERVAL) => {}
            }
        }

        println!();
        println!("📊 Drain Summary:");
        println!("  Total Messages: {}", summary.total_messages);
        println!("  Succeeded: {}", summary.succeeded);
        println!("  Failed: {}", summary.failed);
        println!("  Replaced Values: {}", summary.replaced_values);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!("  - [{:?}] {}", error.error_class, error.message);
                if let Some(file_ref) = &error.file_ref {
                    println!("    File: {file_ref}");
                }
            }
            println!();
        }

        let exit_code = if summary.interrupted && !self.once {
            println!("⚠️  Worker stopped by shutdown signal.");
            tracing::info!("Worker interrupted by signal");
            130 // SIGINT exit code (standard Unix convention)
        } else if summary.is_successful() {
            println!("✅ Queue drained successfully!");
            0
        } else {
            println!("⚠️  Queue drained with failures");
            1 // Processing failure exit code
        };

        Ok(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_args_defaults() {
        let args = WorkerArgs { once: false };
        assert!(!args.once);
    }

    #[tokio::test]
    async fn test_worker_fails_without_config() {
        let args = WorkerArgs { once: true };
        let (_tx, rx) = watch::channel(false);
        let code = args.execute("definitely-no-config.toml", rx).await.unwrap();
        assert_eq!(code, 2);
    }
}
