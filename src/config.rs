//! Pipeline configuration
//!
//! An explicit configuration struct passed to the orchestrator at
//! construction time. Values come from the environment (with named default
//! constants as fallback) or from a YAML file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Defaults
// ============================================================================

/// Default GCP project identifier
pub const DEFAULT_PROJECT_ID: &str = "daring-atrium-454004-n4";

/// Default GCS bucket for staged artifacts
pub const DEFAULT_BUCKET: &str = "assgnment_1";

/// Default BigQuery dataset name
pub const DEFAULT_DATASET: &str = "assgnment_ds";

/// Default BigQuery table name
pub const DEFAULT_TABLE: &str = "assgnment_t";

/// Default directory for generated artifacts
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Production BigQuery REST endpoint
pub const DEFAULT_BIGQUERY_BASE_URL: &str = "https://bigquery.googleapis.com";

// ============================================================================
// Pipeline Config
// ============================================================================

/// Complete pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// GCP project identifier
    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// GCS bucket name for staged artifacts
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// BigQuery dataset name
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// BigQuery table name
    #[serde(default = "default_table")]
    pub table: String,

    /// Directory where generated artifacts are written
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Warehouse client configuration
    #[serde(default)]
    pub warehouse: WarehouseConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            bucket: default_bucket(),
            dataset: default_dataset(),
            table: default_table(),
            output_dir: default_output_dir(),
            warehouse: WarehouseConfig::default(),
        }
    }
}

fn default_project_id() -> String {
    DEFAULT_PROJECT_ID.to_string()
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl PipelineConfig {
    /// Load configuration from the environment, falling back to the
    /// named defaults for anything unset.
    ///
    /// Recognized variables: `PROJECT_ID`, `BUCKET_NAME`, `DATASET_NAME`,
    /// `TABLE_NAME`, `OUTPUT_DIR`, `BIGQUERY_TOKEN`.
    pub fn from_env() -> Self {
        Self {
            project_id: env_or("PROJECT_ID", DEFAULT_PROJECT_ID),
            bucket: env_or("BUCKET_NAME", DEFAULT_BUCKET),
            dataset: env_or("DATASET_NAME", DEFAULT_DATASET),
            table: env_or("TABLE_NAME", DEFAULT_TABLE),
            output_dir: env_or("OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
            warehouse: WarehouseConfig {
                auth_token: std::env::var("BIGQUERY_TOKEN").ok(),
                ..WarehouseConfig::default()
            },
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The fully qualified three-part load target identifier.
    pub fn table_id(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset, self.table)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

// ============================================================================
// Warehouse Config
// ============================================================================

/// BigQuery client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// BigQuery REST base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pre-issued OAuth bearer token, if any
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Seconds between job status polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,

    /// Maximum polls before giving up on a job
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u64,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            poll_interval_seconds: default_poll_interval(),
            max_poll_attempts: default_max_poll_attempts(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BIGQUERY_BASE_URL.to_string()
}

fn default_poll_interval() -> u64 {
    5
}

fn default_max_poll_attempts() -> u64 {
    120 // 10 minutes at 5 second intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.project_id, DEFAULT_PROJECT_ID);
        assert_eq!(config.bucket, DEFAULT_BUCKET);
        assert_eq!(config.dataset, DEFAULT_DATASET);
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.warehouse.base_url, DEFAULT_BIGQUERY_BASE_URL);
        assert_eq!(config.warehouse.poll_interval_seconds, 5);
        assert_eq!(config.warehouse.max_poll_attempts, 120);
        assert!(config.warehouse.auth_token.is_none());
    }

    #[test]
    fn test_table_id() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.table_id(),
            "daring-atrium-454004-n4.assgnment_ds.assgnment_t"
        );
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let config = PipelineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.bucket, DEFAULT_BUCKET);
    }

    #[test]
    fn test_parse_yaml_overrides() {
        let yaml = r#"
project_id: prod-project
bucket: prod-staging
dataset: hr
table: employees
warehouse:
  poll_interval_seconds: 2
"#;

        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.project_id, "prod-project");
        assert_eq!(config.bucket, "prod-staging");
        assert_eq!(config.table_id(), "prod-project.hr.employees");
        assert_eq!(config.warehouse.poll_interval_seconds, 2);
        // Unset fields keep their defaults
        assert_eq!(config.warehouse.max_poll_attempts, 120);
    }
}
