//! Pipeline orchestration
//!
//! The pipeline layer connects the engine to its collaborators: submission
//! puts validated file references on the work queue, the worker drains the
//! queue and stores anonymized output, and the status operation reports
//! whether output exists yet.

pub mod summary;
pub mod worker;

pub use summary::{PipelineError, PipelineSummary};
pub use worker::PipelineWorker;
