//! Bucket uploader over `object_store`

use super::Uploader;
use crate::error::{Error, Result};
use crate::types::Artifact;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Uploads artifacts into a single fixed bucket
#[derive(Debug, Clone)]
pub struct BucketUploader {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Destination bucket name
    bucket: String,
    /// URI scheme for returned locations
    scheme: String,
}

impl BucketUploader {
    /// Create an uploader for a GCS bucket.
    ///
    /// Credentials come from the environment (service account file,
    /// application default credentials), as resolved by `object_store`.
    pub fn gcs(bucket: impl Into<String>) -> Result<Self> {
        let bucket = bucket.into();
        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(&bucket)
            .build()
            .map_err(|e| Error::transport(format!("Failed to create GCS client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            bucket,
            scheme: "gs".to_string(),
        })
    }

    /// Create an uploader backed by a local directory.
    ///
    /// The directory stands in for the bucket; returned URIs use the
    /// `file` scheme. Used by tests and offline runs.
    pub fn local(root: impl AsRef<Path>, bucket: impl Into<String>) -> Result<Self> {
        let store = LocalFileSystem::new_with_prefix(root.as_ref())
            .map_err(|e| Error::transport(format!("Failed to create local store: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            bucket: bucket.into(),
            scheme: "file".to_string(),
        })
    }

    /// The URI scheme of returned locations (`gs` or `file`).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The canonical URI for an object key in this bucket.
    pub fn object_uri(&self, key: &str) -> String {
        format!("{}://{}/{}", self.scheme, self.bucket, key)
    }
}

#[async_trait]
impl Uploader for BucketUploader {
    async fn upload(&self, artifact: &Artifact) -> Result<String> {
        let data = tokio::fs::read(&artifact.path).await.map_err(|e| {
            Error::transport(format!(
                "Failed to read artifact {}: {e}",
                artifact.path.display()
            ))
        })?;

        let key = ObjectPath::from(artifact.filename.as_str());
        self.store
            .put(&key, Bytes::from(data).into())
            .await
            .map_err(|e| Error::transport(format!("Failed to upload {key}: {e}")))?;

        let uri = self.object_uri(&artifact.filename);
        info!("File uploaded to object store: {uri}");
        Ok(uri)
    }
}
