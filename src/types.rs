//! Common types used throughout csv2bq
//!
//! Shared vocabulary for the three pipeline stages: the artifact handed
//! from the generator to the uploader, and the stage tag carried by errors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Pipeline Stage
// ============================================================================

/// The three pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Produce the local CSV artifact
    Generate,
    /// Stage the artifact to the object store
    Upload,
    /// Run the warehouse load job
    Load,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Generate => "generate",
            Stage::Upload => "upload",
            Stage::Load => "load",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Artifact
// ============================================================================

/// A locally generated tabular file, handed from the generator to the uploader.
///
/// The file is written once and never deleted by the pipeline; the object
/// store key is the bare filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Full path to the file on local storage
    pub path: PathBuf,
    /// Bare filename, used as the object key
    pub filename: String,
    /// Number of data rows (excluding the header)
    pub rows: usize,
}

impl Artifact {
    /// Create an artifact handle from a path.
    ///
    /// The filename component becomes the object key.
    pub fn new(path: impl Into<PathBuf>, rows: usize) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            filename,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Generate.to_string(), "generate");
        assert_eq!(Stage::Upload.to_string(), "upload");
        assert_eq!(Stage::Load.to_string(), "load");
    }

    #[test]
    fn test_artifact_filename_from_path() {
        let artifact = Artifact::new("/tmp/run/employee_data_20250101000000.csv", 3);
        assert_eq!(artifact.filename, "employee_data_20250101000000.csv");
        assert_eq!(artifact.rows, 3);
    }
}
