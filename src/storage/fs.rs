//! File-per-record backend: `<root>/<namespace>/<key>.json`.

use super::{is_valid_key, validate_key, Backend, StoreError};
use crate::utils::atomic_write;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores every record as its own JSON file under a data directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this backend writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, namespace: &str, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(namespace)?;
        validate_key(key)?;
        Ok(self.root.join(namespace).join(format!("{key}.json")))
    }

    /// Where a record would live, or `None` when `key` could never have been
    /// written.
    fn lookup_path(&self, namespace: &str, key: &str) -> Result<Option<PathBuf>, StoreError> {
        validate_key(namespace)?;
        if !is_valid_key(key) {
            return Ok(None);
        }
        Ok(Some(self.root.join(namespace).join(format!("{key}.json"))))
    }
}

#[async_trait]
impl Backend for FsBackend {
    async fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let Some(path) = self.lookup_path(namespace, key)? else {
            return Ok(None);
        };
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, namespace: &str, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        let path = self.record_path(namespace, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let len = bytes.len();
        tokio::task::spawn_blocking(move || atomic_write(&path, &bytes))
            .await
            .map_err(|e| StoreError::TaskError(e.to_string()))??;
        debug!(namespace, key, bytes = len, "Wrote record file");
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        let Some(path) = self.lookup_path(namespace, key)? else {
            return Ok(false);
        };
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn contains(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        let Some(path) = self.lookup_path(namespace, key)? else {
            return Ok(false);
        };
        Ok(fs::try_exists(&path).await?)
    }
}
