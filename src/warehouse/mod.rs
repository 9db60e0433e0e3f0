//! Warehouse loader module
//!
//! Submits an asynchronous BigQuery load job for a staged object and
//! blocks until the job reaches a terminal state. This is the one place
//! genuine latency exists in the pipeline; the wait is warehouse-side
//! processing time.

mod client;
mod types;

pub use client::BigQueryClient;
pub use types::{
    ErrorProto, Job, JobConfiguration, JobReference, JobState, JobStatus, LoadJobConfig,
    TableReference, SOURCE_FORMAT_CSV,
};

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Ingests a staged object into the warehouse.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Load the object at `source_uri` and return a status message
    /// naming the destination table.
    async fn load(&self, source_uri: &str) -> Result<String>;
}

/// Loads staged CSV objects into a fixed BigQuery table
#[derive(Debug, Clone)]
pub struct BigQueryLoader {
    client: BigQueryClient,
    table: TableReference,
    poll_interval: Duration,
    max_poll_attempts: u64,
}

impl BigQueryLoader {
    /// Create a loader from pipeline configuration.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let client = BigQueryClient::new(&config.warehouse, &config.project_id)?;
        let table = TableReference::new(&config.project_id, &config.dataset, &config.table);

        Ok(Self {
            client,
            table,
            poll_interval: Duration::from_secs(config.warehouse.poll_interval_seconds),
            max_poll_attempts: config.warehouse.max_poll_attempts,
        })
    }

    /// The configured load target.
    pub fn table(&self) -> &TableReference {
        &self.table
    }

    /// Resolve a terminal status into the loader's result.
    fn conclude(&self, status: &JobStatus) -> Result<String> {
        if let Some(error) = &status.error_result {
            let reason = error.reason.as_deref().unwrap_or("unknown");
            return Err(Error::load_job(format!("{} ({reason})", error.message)));
        }

        let table_id = self.table.fully_qualified();
        info!("Data loaded into BigQuery: {table_id}");
        Ok(format!("Data loaded into {table_id}"))
    }
}

#[async_trait]
impl Loader for BigQueryLoader {
    async fn load(&self, source_uri: &str) -> Result<String> {
        let job = Job::load(LoadJobConfig::csv(source_uri, self.table.clone()));
        let submitted = self.client.insert_job(&job).await?;

        let job_id = submitted
            .job_reference
            .as_ref()
            .and_then(|r| r.job_id.clone())
            .ok_or_else(|| Error::load_job("insert response carried no job reference"))?;
        debug!("Load job submitted: {job_id}");

        // The insert response may already be terminal for tiny loads.
        let mut status = submitted.status;
        let mut attempts = 0;

        loop {
            if let Some(current) = &status {
                if current.job_state().is_terminal() {
                    return self.conclude(current);
                }
                debug!("Load job {job_id} state: {}", current.state);
            }

            if attempts >= self.max_poll_attempts {
                return Err(Error::LoadJobTimeout { job_id, attempts });
            }

            tokio::time::sleep(self.poll_interval).await;
            attempts += 1;
            status = self.client.get_job(&job_id).await?.status;
        }
    }
}
