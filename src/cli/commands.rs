//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csv2bq ingestion pipeline CLI
#[derive(Parser, Debug)]
#[command(name = "csv2bq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); environment variables with built-in
    /// defaults are used when absent
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands; a bare invocation runs the pipeline
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: generate, upload, load
    Run,

    /// Generate the CSV artifact only and print its filename
    Generate,

    /// Print the resolved configuration as YAML
    Config,
}
