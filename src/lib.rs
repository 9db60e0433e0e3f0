// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # csv2bq
//!
//! A minimal, Rust-native three-stage ingestion pipeline:
//! generate a CSV artifact, stage it to Google Cloud Storage, and load it
//! into a BigQuery table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv2bq::config::PipelineConfig;
//! use csv2bq::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = PipelineConfig::from_env();
//!     let pipeline = Pipeline::from_config(&config).expect("pipeline setup");
//!
//!     // One status line, success or failure; never raises past execute().
//!     println!("{}", pipeline.execute().await);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Pipeline                            │
//! │    run() → generate → upload → load (strictly in order)     │
//! │    execute() → single failure boundary, one status string   │
//! └─────────────────────────────────────────────────────────────┘
//!                │               │               │
//! ┌──────────────┴──┬────────────┴───┬───────────┴─────────────┐
//! │    Generate     │    Storage     │        Warehouse        │
//! ├─────────────────┼────────────────┼─────────────────────────┤
//! │ CSV artifact    │ GCS put        │ BigQuery load job       │
//! │ 3 sample rows   │ gs://…/key URI │ submit → poll → DONE    │
//! └─────────────────┴────────────────┴─────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pipeline
pub mod error;

/// Common types shared across stages
pub mod types;

/// Pipeline configuration
pub mod config;

/// Dataset generator (local CSV artifact)
pub mod generate;

/// Object store uploader (GCS)
pub mod storage;

/// Warehouse loader (BigQuery load jobs)
pub mod warehouse;

/// Pipeline orchestrator
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Artifact, Stage};

pub use config::PipelineConfig;
pub use pipeline::Pipeline;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
