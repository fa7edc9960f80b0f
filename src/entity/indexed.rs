//! The store + index pair backing one entity kind.

use super::{Entity, EntityError};
use crate::index::{Index, Page};
use crate::metrics::OperationTimer;
use crate::store::EntityStore;
use std::fmt;
use std::marker::PhantomData;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

/// Binds an [`EntityStore`] and the kind's [`Index`] to one record type.
///
/// The store and index are kept in step:
/// - `create` writes the record, then registers its id. If the index update
///   fails the record is deleted again, so an indexed id always has a record.
/// - `delete` removes the record, then deregisters its id.
/// - `list` pages through the index and loads each record, skipping (and
///   logging) ids whose record has gone missing.
pub struct IndexedEntity<T: Entity> {
    store: EntityStore,
    index: Index,
    seeded: OnceCell<()>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Entity> fmt::Debug for IndexedEntity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedEntity")
            .field("kind", &T::KIND)
            .field("index", &self.index.name())
            .field("seeded", &self.seeded.initialized())
            .finish_non_exhaustive()
    }
}

impl<T: Entity> IndexedEntity<T> {
    pub fn new(store: EntityStore, page_size: usize) -> Self {
        let index = Index::new(T::INDEX, store.clone(), page_size);
        Self {
            store,
            index,
            seeded: OnceCell::new(),
            _kind: PhantomData,
        }
    }

    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Persist `record` and register it in the index.
    pub async fn create(&self, record: T) -> Result<T, EntityError> {
        let _timer = OperationTimer::new("entity_create").kind(T::KIND);
        let id = record.id().to_string();
        self.store.put(T::KIND, &id, &record).await?;

        if let Err(e) = self.index.insert(&id).await {
            warn!(kind = T::KIND, id = %id, error = %e, "Index insert failed, rolling back record");
            if let Err(rollback) = self.store.delete(T::KIND, &id).await {
                error!(kind = T::KIND, id = %id, error = %rollback, "Rollback of record failed");
            }
            return Err(e.into());
        }

        debug!(kind = T::KIND, id = %id, "Created entity");
        Ok(record)
    }

    /// Remove the record and its index entry. Returns whether the record existed.
    pub async fn delete(&self, id: &str) -> Result<bool, EntityError> {
        let _timer = OperationTimer::new("entity_delete").kind(T::KIND);
        let existed = self.store.delete(T::KIND, id).await?;
        // Always deregister, which also clears an entry left dangling earlier.
        let indexed = self.index.remove(id).await?;
        if indexed != existed {
            warn!(kind = T::KIND, id, existed, indexed, "Store and index disagreed on delete");
        }
        Ok(existed)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, EntityError> {
        Ok(self.store.exists(T::KIND, id).await?)
    }

    /// Current state of `id`, or the kind's initial state if nothing is stored.
    pub async fn get_state(&self, id: &str) -> Result<T, EntityError> {
        Ok(self
            .store
            .get(T::KIND, id)
            .await?
            .unwrap_or_else(T::initial_state))
    }

    /// The stored record, or `NotFound`.
    pub async fn find(&self, id: &str) -> Result<T, EntityError> {
        self.store
            .get(T::KIND, id)
            .await?
            .ok_or_else(|| EntityError::not_found(T::LABEL, id))
    }

    /// Atomically replace the record of `id` with `transform(current)`.
    pub async fn mutate<F>(&self, id: &str, transform: F) -> Result<T, EntityError>
    where
        F: FnOnce(T) -> T + Send,
    {
        let _timer = OperationTimer::new("entity_mutate").kind(T::KIND);
        Ok(self
            .store
            .mutate(T::KIND, id, T::initial_state(), transform)
            .await?)
    }

    /// Like [`IndexedEntity::mutate`], but `NotFound` when nothing is stored
    /// under `id` instead of starting from the initial state.
    pub async fn update<F>(&self, id: &str, transform: F) -> Result<T, EntityError>
    where
        F: FnOnce(T) -> T + Send,
    {
        let _timer = OperationTimer::new("entity_update").kind(T::KIND);
        self.store
            .update(T::KIND, id, transform)
            .await?
            .ok_or_else(|| EntityError::not_found(T::LABEL, id))
    }

    /// One page of records in index order.
    pub async fn list(
        &self,
        cursor: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Page<T>, EntityError> {
        let _timer = OperationTimer::new("entity_list").kind(T::KIND);
        let ids = self.index.list(cursor, limit).await?;
        let mut items = Vec::with_capacity(ids.items.len());
        for id in &ids.items {
            match self.store.get::<T>(T::KIND, id).await? {
                Some(record) => items.push(record),
                None => warn!(kind = T::KIND, id = %id, "Indexed id has no record, skipping"),
            }
        }
        Ok(Page {
            items,
            next_cursor: ids.next_cursor,
        })
    }

    /// Load the kind's fixture data unless that already happened.
    ///
    /// Cheap after the first success in this process. The durable flag is only
    /// set once every fixture record is written, so a failed attempt is simply
    /// retried on the next call. Re-running seeding is harmless because record
    /// writes overwrite and index inserts ignore duplicates.
    pub async fn ensure_seed(&self) -> Result<(), EntityError> {
        self.seeded
            .get_or_try_init(|| async {
                if self.index.is_seeded().await? {
                    debug!(kind = T::KIND, "Already seeded");
                    return Ok::<(), EntityError>(());
                }
                let records = T::seed_data();
                let count = records.len();
                for record in records {
                    self.create(record).await?;
                }
                self.index.mark_seeded().await?;
                info!(kind = T::KIND, count, "Seeded fixture data");
                Ok(())
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "indexed_tests.rs"]
mod indexed_tests;
