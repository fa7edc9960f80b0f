//! Typed, per-key storage for entity records.
//!
//! Every record is addressed by `(kind, id)` and serialized as JSON into the
//! configured [`Backend`]. Writers to the same address are serialized through
//! a [`KeyedLocks`] table, which makes [`EntityStore::mutate`] a true
//! read-modify-write: concurrent transforms on one key are applied one after
//! another and none of them is lost.

mod locks;

pub use locks::{KeyGuard, KeyedLocks};

use crate::storage::{Backend, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::trace;

/// Handle to the record storage. Cheap to clone; clones share locks.
#[derive(Debug, Clone)]
pub struct EntityStore {
    backend: Arc<dyn Backend>,
    locks: KeyedLocks,
}

fn lock_key(kind: &str, id: &str) -> String {
    format!("{kind}/{id}")
}

impl EntityStore {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            locks: KeyedLocks::new(),
        }
    }

    /// Read a record. A missing key yields `Ok(None)`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        kind: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        match self.backend.read(kind, id).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Replace the record stored under `(kind, id)`, creating it if absent.
    pub async fn put<T: Serialize + Sync>(
        &self,
        kind: &str,
        id: &str,
        record: &T,
    ) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(record)?;
        let _guard = self.locks.lock(lock_key(kind, id)).await;
        self.backend.write(kind, id, bytes).await
    }

    /// Remove a record. Returns whether anything was removed.
    pub async fn delete(&self, kind: &str, id: &str) -> Result<bool, StoreError> {
        let _guard = self.locks.lock(lock_key(kind, id)).await;
        self.backend.remove(kind, id).await
    }

    pub async fn exists(&self, kind: &str, id: &str) -> Result<bool, StoreError> {
        self.backend.contains(kind, id).await
    }

    /// Apply `transform` to the current record (or `initial` when nothing is
    /// stored yet), persist the result, and return it.
    ///
    /// The read, the transform, and the write happen while holding the key's
    /// lock, so concurrent mutations of one record never interleave.
    pub async fn mutate<T, F>(
        &self,
        kind: &str,
        id: &str,
        initial: T,
        transform: F,
    ) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce(T) -> T + Send,
    {
        let _guard = self.locks.lock(lock_key(kind, id)).await;
        let current = match self.backend.read(kind, id).await? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => initial,
        };
        let next = transform(current);
        let bytes = serde_json::to_vec_pretty(&next)?;
        self.backend.write(kind, id, bytes).await?;
        trace!(kind, id, "Mutated record");
        Ok(next)
    }

    /// Like [`EntityStore::mutate`], but only for a record that is already
    /// stored. Returns `Ok(None)` and writes nothing when the key is absent.
    ///
    /// The presence check happens under the key's lock, so a concurrent
    /// `delete` either runs first (and this returns `None`) or waits.
    pub async fn update<T, F>(
        &self,
        kind: &str,
        id: &str,
        transform: F,
    ) -> Result<Option<T>, StoreError>
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce(T) -> T + Send,
    {
        let _guard = self.locks.lock(lock_key(kind, id)).await;
        let Some(bytes) = self.backend.read(kind, id).await? else {
            return Ok(None);
        };
        let next = transform(serde_json::from_slice(&bytes)?);
        let bytes = serde_json::to_vec_pretty(&next)?;
        self.backend.write(kind, id, bytes).await?;
        trace!(kind, id, "Updated record");
        Ok(Some(next))
    }
}

#[cfg(test)]
#[path = "../store_tests.rs"]
mod store_tests;
