//! Ordered per-kind registries of entity ids.
//!
//! Each index is one document in the reserved [`INDEX_NAMESPACE`], holding
//! `(seq, id)` entries in ascending `seq` order. `seq` is assigned from a
//! counter that only ever grows, so enumeration order is insertion order and a
//! cursor (the `seq` of the last entry handed out) stays valid even when
//! entries before or after it are removed between pages.
//!
//! The document also carries the kind's durable seed flag.

mod document;

pub use document::{IndexDocument, IndexEntry};

use crate::storage::StoreError;
use crate::store::EntityStore;
use serde::Serialize;
use tracing::debug;

/// Storage namespace holding every index document.
pub const INDEX_NAMESPACE: &str = "_index";

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Resume token for the next page; `None` once the end is reached.
    pub next_cursor: Option<String>,
}

/// Clamp a caller-supplied page size: absent means `default`, anything
/// below one becomes one.
#[must_use]
pub fn coerce_limit(limit: Option<i64>, default: usize) -> usize {
    match limit {
        None => default.max(1),
        Some(n) => usize::try_from(n).unwrap_or(0).max(1),
    }
}

/// The index of one entity kind.
#[derive(Debug, Clone)]
pub struct Index {
    name: &'static str,
    store: EntityStore,
    page_size: usize,
}

impl Index {
    pub fn new(name: &'static str, store: EntityStore, page_size: usize) -> Self {
        Self {
            name,
            store,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    async fn document(&self) -> Result<IndexDocument, StoreError> {
        Ok(self
            .store
            .get(INDEX_NAMESPACE, self.name)
            .await?
            .unwrap_or_default())
    }

    /// Register `id`. Inserting an id that is already present is a no-op.
    pub async fn insert(&self, id: &str) -> Result<(), StoreError> {
        let mut added = false;
        self.store
            .mutate(INDEX_NAMESPACE, self.name, IndexDocument::default(), |mut doc| {
                added = doc.insert(id);
                doc
            })
            .await?;
        if added {
            debug!(index = self.name, id, "Index entry added");
        }
        Ok(())
    }

    /// Deregister `id`. Returns whether it was present.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut removed = false;
        self.store
            .mutate(INDEX_NAMESPACE, self.name, IndexDocument::default(), |mut doc| {
                removed = doc.remove(id);
                doc
            })
            .await?;
        Ok(removed)
    }

    /// Up to `limit` ids following `cursor`, in index order.
    ///
    /// A missing or unparseable cursor starts from the beginning.
    pub async fn list(
        &self,
        cursor: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Page<String>, StoreError> {
        let limit = coerce_limit(limit, self.page_size);
        let after = cursor.and_then(|c| c.parse::<u64>().ok());
        Ok(self.document().await?.page(after, limit))
    }

    /// Number of ids currently registered.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.document().await?.entries.len())
    }

    pub async fn is_seeded(&self) -> Result<bool, StoreError> {
        Ok(self.document().await?.seeded)
    }

    /// Durably record that this kind's fixture data has been written.
    pub async fn mark_seeded(&self) -> Result<(), StoreError> {
        self.store
            .mutate(INDEX_NAMESPACE, self.name, IndexDocument::default(), |mut doc| {
                doc.seeded = true;
                doc
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../index_tests.rs"]
mod index_tests;
