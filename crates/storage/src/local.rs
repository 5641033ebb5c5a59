//! Filesystem-backed object store.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::{public_url, validate_key, ObjectStore, StorageError, StoredObject};

/// Writes blobs under a root directory. URLs assume the API serves that
/// directory at `public_base_url`.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: PathBuf, public_base_url: String) -> Self {
        Self {
            root,
            public_base_url,
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        validate_key(key)?;

        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists(key.to_string()),
                _ => StorageError::Io(e),
            })?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        tracing::debug!(
            key,
            size = bytes.len(),
            path = %path.display(),
            "Stored object on local filesystem"
        );
        Ok(StoredObject::describe(
            key,
            public_url(&self.public_base_url, key),
            &bytes,
        ))
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn put_writes_file_and_describes_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(
            dir.path().to_path_buf(),
            "http://localhost:3000/media".into(),
        );

        let stored = store
            .put("videos/3f9a.webm", b"webm-bytes".to_vec(), "video/webm")
            .await
            .unwrap();

        assert_eq!(stored.key, "videos/3f9a.webm");
        assert_eq!(stored.url, "http://localhost:3000/media/videos/3f9a.webm");
        assert_eq!(stored.size_bytes, 10);
        assert_eq!(stored.sha256.len(), 64);
        let written = std::fs::read(dir.path().join("videos/3f9a.webm")).unwrap();
        assert_eq!(written, b"webm-bytes");
    }

    #[tokio::test]
    async fn existing_object_is_never_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().to_path_buf(), "http://x".into());

        store
            .put("videos/v.webm", b"first".to_vec(), "video/webm")
            .await
            .unwrap();
        let second = store
            .put("videos/v.webm", b"second".to_vec(), "video/webm")
            .await;

        assert_matches!(second, Err(StorageError::AlreadyExists(key)) if key == "videos/v.webm");
        let written = std::fs::read(dir.path().join("videos/v.webm")).unwrap();
        assert_eq!(written, b"first");
    }

    #[tokio::test]
    async fn traversal_keys_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().join("root"), "http://x".into());

        let result = store.put("../escape.webm", b"x".to_vec(), "video/webm").await;
        assert_matches!(result, Err(StorageError::InvalidKey(_)));
        assert!(!dir.path().join("escape.webm").exists());
    }
}
