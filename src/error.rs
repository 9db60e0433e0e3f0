//! Error types for csv2bq
//!
//! This module defines the error hierarchy for the entire pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors are tagged by the pipeline stage that produced them, so callers
//! of [`crate::pipeline::Pipeline::run`] can branch on failure cause instead
//! of a single opaque string.

use crate::types::Stage;
use thiserror::Error;

/// The main error type for csv2bq
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Stage Errors
    // ============================================================================
    #[error("Dataset generation failed: {message}")]
    Generation { message: String },

    #[error("Upload failed: {message}")]
    Transport { message: String },

    #[error("Load job failed: {message}")]
    LoadJob { message: String },

    #[error("Load job {job_id} did not reach a terminal state after {attempts} polls")]
    LoadJobTimeout { job_id: String, attempts: u64 },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport-Layer Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a load job error
    pub fn load_job(message: impl Into<String>) -> Self {
        Self::LoadJob {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// The pipeline stage this error is attributable to, if any.
    ///
    /// Ambient errors (config parsing, generic wrappers) have no stage.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Generation { .. } | Error::Io(_) | Error::Csv(_) => Some(Stage::Generate),
            Error::Transport { .. } | Error::ObjectStore(_) => Some(Stage::Upload),
            Error::LoadJob { .. }
            | Error::LoadJobTimeout { .. }
            | Error::Http(_)
            | Error::HttpStatus { .. } => Some(Stage::Load),
            _ => None,
        }
    }
}

/// Result type alias for csv2bq
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::generation("disk full");
        assert_eq!(err.to_string(), "Dataset generation failed: disk full");

        let err = Error::transport("bucket not found");
        assert_eq!(err.to_string(), "Upload failed: bucket not found");

        let err = Error::load_job("schema mismatch");
        assert_eq!(err.to_string(), "Load job failed: schema mismatch");

        let err = Error::http_status(403, "Forbidden");
        assert_eq!(err.to_string(), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_stage_classification() {
        assert_eq!(Error::generation("x").stage(), Some(Stage::Generate));
        assert_eq!(Error::transport("x").stage(), Some(Stage::Upload));
        assert_eq!(Error::load_job("x").stage(), Some(Stage::Load));
        assert_eq!(
            Error::LoadJobTimeout {
                job_id: "job_1".to_string(),
                attempts: 120,
            }
            .stage(),
            Some(Stage::Load)
        );
        assert_eq!(Error::http_status(500, "").stage(), Some(Stage::Load));
        assert_eq!(Error::config("x").stage(), None);
        assert_eq!(Error::Other("x".to_string()).stage(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
