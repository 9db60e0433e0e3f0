//! Dataset generator module
//!
//! Produces the local CSV artifact the pipeline stages and loads: a fixed
//! set of sample employee rows, each carrying the run's capture timestamp.
//!
//! # Overview
//!
//! The generator writes `employee_data_YYYYMMDDHHMMSS.csv` into the
//! configured output directory. Filenames are unique per second of wall
//! clock; two runs within the same second overwrite each other. Artifacts
//! are never deleted by the pipeline.

mod generator;
mod types;

pub use generator::CsvGenerator;
pub use types::{EmployeeRecord, AGE_MAX, AGE_MIN, SAMPLE_EMPLOYEES};

use crate::error::Result;
use crate::types::Artifact;

/// Produces a local artifact and returns a handle to it.
pub trait ArtifactGenerator: Send + Sync {
    /// Generate the artifact on local storage.
    fn generate(&self) -> Result<Artifact>;
}

#[cfg(test)]
mod tests;
