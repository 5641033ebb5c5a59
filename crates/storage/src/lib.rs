//! Object store for recorded video blobs.
//!
//! - [`ObjectStore`] -- write a blob under a fresh key, get back a [`StoredObject`].
//! - [`local::LocalObjectStore`] -- filesystem backend for development and tests.
//! - [`s3::S3ObjectStore`] -- S3 (or S3-compatible) bucket backend.
//!
//! Blob URLs are bearer capabilities: anyone holding one can fetch the clip
//! without passing the access gate. Keys are therefore random tokens minted
//! here, never derived from the public video id, and a key is written once.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub mod config;
pub mod local;
pub mod s3;

pub use config::StorageConfig;

/// Key prefix under which all recorded videos are stored.
pub const VIDEO_KEY_PREFIX: &str = "videos";

/// Errors raised by object store backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key is empty, absolute, or escapes the store root.
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    /// An object already exists under the key.
    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote backend rejected or failed the request.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// What a successful write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    /// Retrieval URL for the blob.
    pub url: String,
    /// Lowercase hex SHA-256 of the stored bytes.
    pub sha256: String,
    pub size_bytes: usize,
}

impl StoredObject {
    /// Describe `bytes` stored under `key` and reachable at `url`.
    pub(crate) fn describe(key: &str, url: String, bytes: &[u8]) -> Self {
        Self {
            key: key.to_string(),
            url,
            sha256: format!("{:x}", Sha256::digest(bytes)),
            size_bytes: bytes.len(),
        }
    }
}

/// A write-once blob store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`. Fails with [`StorageError::AlreadyExists`]
    /// rather than replacing an existing object.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError>;

    /// Short backend name for logs and the health report.
    fn backend_name(&self) -> &'static str;
}

/// Build the configured backend.
pub async fn build_object_store(config: &StorageConfig) -> Arc<dyn ObjectStore> {
    match config {
        StorageConfig::Local(local) => Arc::new(local::LocalObjectStore::new(
            local.root.clone(),
            local.public_base_url.clone(),
        )),
        StorageConfig::S3(s3) => Arc::new(s3::S3ObjectStore::connect(s3).await),
    }
}

/// File extension for a recorded video's content type.
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    // Browsers append codec parameters, e.g. `video/webm;codecs=vp8,opus`.
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    match essence.as_str() {
        "video/webm" => "webm",
        "video/mp4" => "mp4",
        "video/quicktime" => "mov",
        _ => "bin",
    }
}

/// Mint a key for a new video blob: `videos/<128-bit random token>.<ext>`.
pub fn new_video_object_key(content_type: &str) -> String {
    format!(
        "{VIDEO_KEY_PREFIX}/{}.{}",
        Uuid::new_v4().simple(),
        extension_for_content_type(content_type)
    )
}

/// Reject keys that are empty, absolute, or contain `..`/`.` segments or backslashes.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.starts_with('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    if key
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Join a public base URL and an object key.
pub(crate) fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{key}", base_url.trim_end_matches('/'))
}
