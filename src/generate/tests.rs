//! Tests for the dataset generator

use super::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

// ============================================================================
// Row Construction Tests
// ============================================================================

#[test]
fn test_sample_rows_fixed_identities() {
    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let rows = CsvGenerator::sample_rows(instant);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].department, "HR");
    assert_eq!(rows[1].name, "Bob");
    assert_eq!(rows[1].department, "Engineering");
    assert_eq!(rows[2].name, "Charlie");
    assert_eq!(rows[2].department, "Marketing");
}

#[test]
fn test_sample_rows_share_one_timestamp() {
    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let rows = CsvGenerator::sample_rows(instant);

    for row in &rows {
        assert_eq!(row.timestamp, "2025-01-01 00:00:00");
    }
}

#[test]
fn test_sample_rows_ages_within_bounds() {
    let instant = Utc.with_ymd_and_hms(2025, 6, 15, 12, 30, 45).unwrap();

    // Randomized field, so sample repeatedly
    for _ in 0..100 {
        for row in CsvGenerator::sample_rows(instant) {
            assert!(
                (AGE_MIN..=AGE_MAX).contains(&row.age),
                "age {} out of bounds",
                row.age
            );
        }
    }
}

// ============================================================================
// Filename Tests
// ============================================================================

#[test]
fn test_filename_format() {
    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        CsvGenerator::filename_for(instant),
        "employee_data_20250101000000.csv"
    );
}

#[test]
fn test_filenames_differ_across_seconds() {
    let first = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 2).unwrap();
    assert_ne!(
        CsvGenerator::filename_for(first),
        CsvGenerator::filename_for(second)
    );
}

#[test]
fn test_filenames_collide_within_one_second() {
    // Second-granularity naming: same instant, same name
    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        CsvGenerator::filename_for(instant),
        CsvGenerator::filename_for(instant)
    );
}

// ============================================================================
// Artifact Tests
// ============================================================================

#[test]
fn test_generate_writes_header_and_three_rows() {
    let temp_dir = tempfile::tempdir().unwrap();
    let generator = CsvGenerator::new(temp_dir.path());

    let artifact = generator.generate().unwrap();
    assert_eq!(artifact.rows, 3);
    assert!(artifact.path.exists());
    assert!(artifact.filename.starts_with("employee_data_"));
    assert!(artifact.filename.ends_with(".csv"));

    let contents = std::fs::read_to_string(&artifact.path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "id,name,age,department,timestamp");
    assert!(lines[1].starts_with("1,Alice,"));
    assert!(lines[2].starts_with("2,Bob,"));
    assert!(lines[3].starts_with("3,Charlie,"));
}

#[test]
fn test_generate_rows_parse_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let generator = CsvGenerator::new(temp_dir.path());
    let artifact = generator.generate().unwrap();

    let mut reader = csv::Reader::from_path(&artifact.path).unwrap();
    let rows: Vec<EmployeeRecord> = reader.deserialize().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 3);
    let timestamps: Vec<&str> = rows.iter().map(|r| r.timestamp.as_str()).collect();
    assert!(timestamps.windows(2).all(|w| w[0] == w[1]));
    assert!(rows.iter().all(|r| (AGE_MIN..=AGE_MAX).contains(&r.age)));
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    let generator = CsvGenerator::new(&missing);

    let err = generator.generate().unwrap_err();
    assert_eq!(err.stage(), Some(crate::types::Stage::Generate));
}
