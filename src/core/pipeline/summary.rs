//! Drain summary and reporting
//!
//! This module defines structures for tracking and reporting the outcome of
//! a queue drain.

use std::time::Duration;

use crate::core::engine::AnonymizationResult;
use crate::domain::errors::{ErrorClass, VeilError};
use crate::domain::ids::FileRef;

/// Summary of one queue drain
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Total number of queue messages taken
    pub total_messages: usize,

    /// Number of files anonymized and stored
    pub succeeded: usize,

    /// Number of files that failed
    pub failed: usize,

    /// Values replaced across all successful files
    pub replaced_values: usize,

    /// Duration of the drain
    pub duration: Duration,

    /// Errors encountered during the drain
    pub errors: Vec<PipelineError>,

    /// Whether the drain stopped early on a shutdown signal
    pub interrupted: bool,
}

impl PipelineSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            total_messages: 0,
            succeeded: 0,
            failed: 0,
            replaced_values: 0,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
            interrupted: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a successfully processed file
    pub fn record_success(&mut self, result: &AnonymizationResult) {
        self.total_messages += 1;
        self.succeeded += 1;
        self.replaced_values += result.replaced_values;
    }

    /// Record a failed file
    pub fn record_failure(&mut self, file_ref: Option<&FileRef>, error: &VeilError) {
        self.total_messages += 1;
        self.failed += 1;
        self.errors.push(PipelineError::from_error(file_ref, error));
    }

    /// Mark the drain as interrupted by shutdown
    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Fold another drain pass into this summary
    ///
    /// Counts and errors accumulate and durations add up, so a polling
    /// worker reports its total work across passes rather than the last
    /// pass alone.
    pub fn merge(&mut self, pass: PipelineSummary) {
        self.total_messages += pass.total_messages;
        self.succeeded += pass.succeeded;
        self.failed += pass.failed;
        self.replaced_values += pass.replaced_values;
        self.duration += pass.duration;
        self.errors.extend(pass.errors);
        self.interrupted |= pass.interrupted;
    }

    /// Check if the drain was fully successful (no failures)
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.errors.is_empty()
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_messages == 0 {
            return 100.0;
        }
        (self.succeeded as f64 / self.total_messages as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_messages = self.total_messages,
            succeeded = self.succeeded,
            failed = self.failed,
            replaced_values = self.replaced_values,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            interrupted = self.interrupted,
            "Drain completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Drain completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_class = ?error.error_class,
                    file_ref = error.file_ref.as_deref().unwrap_or("<unknown>"),
                    message = %error.message,
                    "Drain error"
                );
            }
        }
    }
}

impl Default for PipelineSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipeline error with context
#[derive(Debug, Clone)]
pub struct PipelineError {
    /// Whether the input or the environment was at fault
    pub error_class: ErrorClass,

    /// Error message
    pub message: String,

    /// File reference being processed, when known
    pub file_ref: Option<String>,
}

impl PipelineError {
    /// Create a pipeline error from a domain error
    pub fn from_error(file_ref: Option<&FileRef>, error: &VeilError) -> Self {
        Self {
            error_class: error.class(),
            message: error.to_string(),
            file_ref: file_ref.map(|r| r.as_str().to_string()),
        }
    }
}
