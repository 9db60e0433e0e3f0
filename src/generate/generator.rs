//! CSV artifact generator

use super::types::{EmployeeRecord, AGE_MAX, AGE_MIN, SAMPLE_EMPLOYEES};
use super::ArtifactGenerator;
use crate::error::Result;
use crate::types::Artifact;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timestamp format embedded in every row
const ROW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used in artifact filenames (second granularity)
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Generates a CSV artifact with randomized sample employee rows
#[derive(Debug, Clone)]
pub struct CsvGenerator {
    /// Directory the artifact is written into
    output_dir: PathBuf,
}

impl CsvGenerator {
    /// Create a generator writing into the given directory.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Build the artifact filename for a capture instant.
    pub fn filename_for(instant: DateTime<Utc>) -> String {
        format!(
            "employee_data_{}.csv",
            instant.format(FILENAME_TIMESTAMP_FORMAT)
        )
    }

    /// Build the sample rows for a capture instant.
    ///
    /// Every row shares the instant's formatted timestamp; ages are drawn
    /// uniformly from [`AGE_MIN`, `AGE_MAX`].
    pub fn sample_rows(instant: DateTime<Utc>) -> Vec<EmployeeRecord> {
        let timestamp = instant.format(ROW_TIMESTAMP_FORMAT).to_string();
        let mut rng = rand::rng();

        SAMPLE_EMPLOYEES
            .iter()
            .map(|&(id, name, department)| EmployeeRecord {
                id,
                name: name.to_string(),
                age: rng.random_range(AGE_MIN..=AGE_MAX),
                department: department.to_string(),
                timestamp: timestamp.clone(),
            })
            .collect()
    }

    /// Write header + rows to `path`.
    fn write_rows(path: &Path, rows: &[EmployeeRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ArtifactGenerator for CsvGenerator {
    fn generate(&self) -> Result<Artifact> {
        let now = Utc::now();
        let rows = Self::sample_rows(now);
        let path = self.output_dir.join(Self::filename_for(now));

        Self::write_rows(&path, &rows)?;

        info!("CSV file created: {}", path.display());
        Ok(Artifact::new(path, rows.len()))
    }
}
