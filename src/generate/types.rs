//! Generator types and sample data

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) for randomized ages
pub const AGE_MIN: u32 = 22;

/// Upper bound (inclusive) for randomized ages
pub const AGE_MAX: u32 = 50;

/// The fixed sample set: (id, name, department)
pub const SAMPLE_EMPLOYEES: &[(u32, &str, &str)] = &[
    (1, "Alice", "HR"),
    (2, "Bob", "Engineering"),
    (3, "Charlie", "Marketing"),
];

/// One row of the generated dataset.
///
/// Field order matches the CSV header: `id,name,age,department,timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub department: String,
    /// UTC wall clock at generation time, shared across all rows of one run
    pub timestamp: String,
}
