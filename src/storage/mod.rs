//! Object store uploader module
//!
//! Stages the generated artifact into a bucket, keyed by its filename
//! (no path prefixing, no versioning), and returns the canonical
//! `scheme://bucket/key` URI for the warehouse loader.

mod uploader;

pub use uploader::BucketUploader;

use crate::error::Result;
use crate::types::Artifact;
use async_trait::async_trait;

/// Copies a local artifact into remote storage.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload the whole file and return its canonical location URI.
    async fn upload(&self, artifact: &Artifact) -> Result<String>;
}
