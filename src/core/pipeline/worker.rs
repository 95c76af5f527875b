//! Pipeline worker - orchestrates queue draining
//!
//! The worker ties the collaborators together: it takes file references off
//! the work queue, fetches the bytes from the source, runs the anonymization
//! engine, and stores the output in the sink under the reference's object
//! key. Per-file failures are recorded and the drain continues; nothing is
//! ever written for a file that failed.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::adapters::factory::{create_object_store, create_work_queue};
use crate::adapters::queue::WorkQueue;
use crate::adapters::storage::{ByteSink, ByteSource};
use crate::config::VeilConfig;
use crate::core::engine::{AnonymizationEngine, AnonymizationResult};
use crate::core::pipeline::summary::PipelineSummary;
use crate::domain::document::ProcessingStatus;
use crate::domain::errors::{QueueError, VeilError};
use crate::domain::ids::FileRef;
use crate::domain::result::Result;

/// Content type of every anonymized output object.
const OUTPUT_CONTENT_TYPE: &str = "application/json";

/// Pipeline worker
pub struct PipelineWorker {
    engine: Arc<AnonymizationEngine>,
    source: Arc<dyn ByteSource>,
    sink: Arc<dyn ByteSink>,
    queue: Arc<dyn WorkQueue>,
}

impl PipelineWorker {
    /// Create a worker from its collaborators
    pub fn new(
        engine: Arc<AnonymizationEngine>,
        source: Arc<dyn ByteSource>,
        sink: Arc<dyn ByteSink>,
        queue: Arc<dyn WorkQueue>,
    ) -> Self {
        Self {
            engine,
            source,
            sink,
            queue,
        }
    }

    /// Create a worker with collaborators selected from configuration
    pub fn from_config(config: &VeilConfig) -> Result<Self> {
        let engine = Arc::new(AnonymizationEngine::from_config(config));
        let (source, sink) = create_object_store(&config.storage)?;
        let queue = create_work_queue(&config.queue)?;
        Ok(Self::new(engine, source, sink, queue))
    }

    /// Enqueue a file reference for processing
    ///
    /// The reference is already validated by construction; submission only
    /// hands it to the queue.
    pub async fn submit(&self, file_ref: &FileRef) -> Result<()> {
        self.queue.enqueue(file_ref).await?;
        info!(file_ref = %file_ref, "File reference queued");
        Ok(())
    }

    /// Fetch, anonymize, and store one file
    ///
    /// Output is stored under the reference's object key with a JSON content
    /// type. Any failure leaves the sink untouched for this file.
    pub async fn process_one(&self, file_ref: &FileRef) -> Result<AnonymizationResult> {
        let object = self.source.fetch(file_ref).await?;
        let result = self.engine.process(&object.bytes, &object.content_type)?;
        let output = result.to_bytes()?;
        self.sink
            .store(file_ref.object_key(), &output, OUTPUT_CONTENT_TYPE)
            .await?;

        info!(
            file_ref = %file_ref,
            object_key = file_ref.object_key(),
            replaced = result.replaced_values,
            "Stored anonymized output"
        );
        Ok(result)
    }

    /// Drain the queue
    ///
    /// Takes messages until the queue is empty or shutdown is signalled.
    /// Per-file failures (including undecodable queue messages) are recorded
    /// in the summary and the drain continues; only an unreachable queue
    /// aborts it.
    pub async fn drain(&self, shutdown: watch::Receiver<bool>) -> Result<PipelineSummary> {
        let start = Instant::now();
        let mut summary = PipelineSummary::new();

        debug!("Starting queue drain");

        loop {
            if *shutdown.borrow() {
                info!("Shutdown requested, stopping queue drain");
                summary.mark_interrupted();
                break;
            }

            let file_ref = match self.queue.dequeue().await {
                Ok(Some(file_ref)) => file_ref,
                Ok(None) => break,
                Err(err @ VeilError::Queue(QueueError::Malformed(_))) => {
                    error!(error = %err, "Discarding undecodable queue message");
                    summary.record_failure(None, &err);
                    continue;
                }
                Err(e) => return Err(e),
            };

            match self.process_one(&file_ref).await {
                Ok(result) => summary.record_success(&result),
                Err(e) => {
                    error!(
                        file_ref = %file_ref,
                        error = %e,
                        "Failed to process file"
                    );
                    summary.record_failure(Some(&file_ref), &e);
                }
            }
        }

        let summary = summary.with_duration(start.elapsed());
        // An empty pass logs nothing so an idle polling worker stays quiet.
        if summary.total_messages > 0 || summary.interrupted {
            summary.log_summary();
        }
        Ok(summary)
    }

    /// Report whether anonymized output exists for a file reference
    ///
    /// Probes the sink for the reference's object key. Both answers are
    /// ordinary outcomes; an error means the sink could not be asked.
    pub async fn status(&self, file_ref: &FileRef) -> Result<ProcessingStatus> {
        let exists = self.sink.exists(file_ref.object_key()).await?;
        Ok(if exists {
            ProcessingStatus::Ready
        } else {
            ProcessingStatus::NotReady
        })
    }
}
