//! Pipeline orchestrator
//!
//! Runs the three stages strictly in order: generate → upload → load.
//! No stage begins before the previous one returns. A single failure
//! boundary at [`Pipeline::execute`] collapses any stage error into a
//! fixed failure string after logging it; callers needing the cause
//! use [`Pipeline::run`] and branch on [`crate::Error::stage`].

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::generate::{ArtifactGenerator, CsvGenerator};
use crate::storage::{BucketUploader, Uploader};
use crate::warehouse::{BigQueryLoader, Loader};
use tracing::{debug, error, info};

/// Prefix of the status line for a successful run
pub const SUCCESS_PREFIX: &str = "Pipeline executed successfully: ";

/// Fixed status line for a failed run
pub const FAILURE_MESSAGE: &str = "Pipeline execution failed";

/// The three-stage ingestion pipeline
pub struct Pipeline {
    generator: Box<dyn ArtifactGenerator>,
    uploader: Box<dyn Uploader>,
    loader: Box<dyn Loader>,
}

impl Pipeline {
    /// Assemble a pipeline from its stages.
    pub fn new(
        generator: Box<dyn ArtifactGenerator>,
        uploader: Box<dyn Uploader>,
        loader: Box<dyn Loader>,
    ) -> Self {
        Self {
            generator,
            uploader,
            loader,
        }
    }

    /// Wire the real stages from configuration: CSV generator, GCS
    /// uploader, BigQuery loader.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        Ok(Self::new(
            Box::new(CsvGenerator::new(&config.output_dir)),
            Box::new(BucketUploader::gcs(&config.bucket)?),
            Box::new(BigQueryLoader::from_config(config)?),
        ))
    }

    /// Run the stages in order and return the loader's status message.
    ///
    /// Errors carry their originating stage; nothing is retried and no
    /// partial results are rolled back (a staged-but-unloaded object
    /// stays in the bucket).
    pub async fn run(&self) -> Result<String> {
        let artifact = self.generator.generate()?;
        debug!(
            "Artifact on disk: {} (exists: {})",
            artifact.path.display(),
            artifact.path.exists()
        );

        let uri = self.uploader.upload(&artifact).await?;
        let status = self.loader.load(&uri).await?;

        info!("Pipeline complete: {status}");
        Ok(status)
    }

    /// Run the pipeline behind the failure boundary.
    ///
    /// Returns one human-readable status string; never propagates an
    /// error. The failing stage is only distinguished in the log line.
    pub async fn execute(&self) -> String {
        match self.run().await {
            Ok(status) => format!("{SUCCESS_PREFIX}{status}"),
            Err(e) => {
                match e.stage() {
                    Some(stage) => error!("Error in pipeline ({stage} stage): {e}"),
                    None => error!("Error in pipeline: {e}"),
                }
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
