//! BigQuery job payload types
//!
//! Serde mirrors of the slice of the BigQuery v2 REST surface the loader
//! consumes: load-job configuration on the way in, job reference and
//! status on the way out.

use serde::{Deserialize, Serialize};

/// Source format submitted with load jobs
pub const SOURCE_FORMAT_CSV: &str = "CSV";

// ============================================================================
// Table Reference
// ============================================================================

/// Fully qualified three-part load target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl TableReference {
    /// Create a table reference.
    pub fn new(
        project_id: impl Into<String>,
        dataset_id: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
        }
    }

    /// Render as `project.dataset.table`.
    pub fn fully_qualified(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

// ============================================================================
// Job Configuration
// ============================================================================

/// Load-job configuration: delimited-text input, header skipped,
/// schema autodetected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadJobConfig {
    /// Source object URIs (`gs://bucket/key`)
    pub source_uris: Vec<String>,

    /// Destination table (must already exist)
    pub destination_table: TableReference,

    /// Input format
    pub source_format: String,

    /// Header rows to skip
    pub skip_leading_rows: u32,

    /// Let the warehouse infer the schema
    pub autodetect: bool,
}

impl LoadJobConfig {
    /// Configuration for a single-URI CSV load: skip one header row,
    /// autodetect the schema.
    pub fn csv(source_uri: impl Into<String>, destination_table: TableReference) -> Self {
        Self {
            source_uris: vec![source_uri.into()],
            destination_table,
            source_format: SOURCE_FORMAT_CSV.to_string(),
            skip_leading_rows: 1,
            autodetect: true,
        }
    }
}

/// Job configuration envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfiguration {
    pub load: LoadJobConfig,
}

// ============================================================================
// Job
// ============================================================================

/// A BigQuery job resource, as submitted and as returned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Configuration (present on submission)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<JobConfiguration>,

    /// Server-assigned reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<JobReference>,

    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl Job {
    /// Build a job submission for a load configuration.
    pub fn load(config: LoadJobConfig) -> Self {
        Self {
            configuration: Some(JobConfiguration { load: config }),
            job_reference: None,
            status: None,
        }
    }
}

/// Server-assigned job identity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ============================================================================
// Job Status
// ============================================================================

/// Job status as reported by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    /// Raw state string (`PENDING`, `RUNNING`, `DONE`)
    #[serde(default)]
    pub state: String,

    /// Fatal error, present only when the job ended in failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_result: Option<ErrorProto>,

    /// Non-fatal and fatal errors encountered while running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorProto>>,
}

impl JobStatus {
    /// Parsed job state.
    pub fn job_state(&self) -> JobState {
        JobState::from_api(&self.state)
    }
}

/// One error entry from the job status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorProto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub message: String,
}

/// Lifecycle state of a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Queued, waiting to start
    Pending,
    /// In progress
    Running,
    /// Terminal; success or failure depends on `errorResult`
    Done,
    /// Unrecognized state string
    Unknown(String),
}

impl JobState {
    /// Parse the API's state string.
    pub fn from_api(state: &str) -> Self {
        match state {
            "PENDING" => Self::Pending,
            "RUNNING" => Self::Running,
            "DONE" => Self::Done,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Check if the job has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}
