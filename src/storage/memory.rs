//! Volatile backend used for `--ephemeral` runs and tests.

use super::{is_valid_key, validate_key, Backend, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

type Namespaces = HashMap<String, HashMap<String, Vec<u8>>>;

/// Keeps every namespace in process memory. Contents vanish on restart.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    namespaces: RwLock<Namespaces>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(namespace)?;
        if !is_valid_key(key) {
            return Ok(None);
        }
        let namespaces = self.namespaces.read().await;
        Ok(namespaces
            .get(namespace)
            .and_then(|records| records.get(key))
            .cloned())
    }

    async fn write(&self, namespace: &str, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        validate_key(namespace)?;
        validate_key(key)?;
        let mut namespaces = self.namespaces.write().await;
        namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), bytes);
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        validate_key(namespace)?;
        if !is_valid_key(key) {
            return Ok(false);
        }
        let mut namespaces = self.namespaces.write().await;
        Ok(namespaces
            .get_mut(namespace)
            .and_then(|records| records.remove(key))
            .is_some())
    }

    async fn contains(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        validate_key(namespace)?;
        if !is_valid_key(key) {
            return Ok(false);
        }
        let namespaces = self.namespaces.read().await;
        Ok(namespaces
            .get(namespace)
            .is_some_and(|records| records.contains_key(key)))
    }
}
