use super::*;
use crate::entity::{Customer, Policy};
use crate::index::INDEX_NAMESPACE;
use crate::storage::{Backend, FsBackend, MemoryBackend, StoreError};
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Memory backend whose index writes can be switched to fail.
#[derive(Debug, Default)]
struct FailingIndexBackend {
    inner: MemoryBackend,
    fail_index_writes: AtomicBool,
}

impl FailingIndexBackend {
    fn failing() -> Arc<Self> {
        let backend = Self::default();
        backend.fail_index_writes.store(true, Ordering::SeqCst);
        Arc::new(backend)
    }

    fn recover(&self) {
        self.fail_index_writes.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Backend for FailingIndexBackend {
    async fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.read(namespace, key).await
    }

    async fn write(&self, namespace: &str, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        if namespace == INDEX_NAMESPACE && self.fail_index_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("index volume unavailable").into());
        }
        self.inner.write(namespace, key, bytes).await
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        self.inner.remove(namespace, key).await
    }

    async fn contains(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        self.inner.contains(namespace, key).await
    }
}

fn seed_ids<T: Entity>() -> Vec<String> {
    T::seed_data().iter().map(|r| r.id().to_string()).collect()
}

fn store() -> EntityStore {
    EntityStore::new(Arc::new(MemoryBackend::new()))
}

fn customer(id: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: "Test Customer".to_string(),
        email: "test@example.com".to_string(),
        phone: "555-0100-99".to_string(),
        address: "99 Test Avenue".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn test_create_then_get_state_returns_record() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    let created = customers.create(customer("cust_a")).await.unwrap();

    assert_eq!(customers.get_state("cust_a").await.unwrap(), created);
    let ids = customers.index().list(None, None).await.unwrap().items;
    assert_eq!(ids, vec!["cust_a".to_string()]);
}

#[tokio::test]
async fn test_get_state_of_unknown_id_is_initial() {
    let policies = IndexedEntity::<Policy>::new(store(), 100);
    assert_eq!(policies.get_state("pol_none").await.unwrap(), Policy::initial_state());
}

#[tokio::test]
async fn test_find_missing_is_not_found() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    let err = customers.find("cust_9").await.unwrap_err();
    assert!(matches!(err, EntityError::NotFound { .. }));
    assert_eq!(err.to_string(), "Customer not found");
}

#[tokio::test]
async fn test_delete_twice() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    customers.create(customer("cust_a")).await.unwrap();

    assert!(customers.delete("cust_a").await.unwrap());
    assert!(!customers.exists("cust_a").await.unwrap());
    assert!(!customers.delete("cust_a").await.unwrap());
    assert_eq!(customers.index().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_skips_dangling_ids() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    customers.create(customer("cust_a")).await.unwrap();
    customers.index().insert("cust_ghost").await.unwrap();
    customers.create(customer("cust_b")).await.unwrap();

    let page = customers.list(None, None).await.unwrap();
    let ids: Vec<&str> = page.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["cust_a", "cust_b"]);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_delete_clears_dangling_index_entry() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    customers.index().insert("cust_ghost").await.unwrap();

    assert!(!customers.delete("cust_ghost").await.unwrap());
    assert_eq!(customers.index().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_ensure_seed_is_idempotent() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    customers.ensure_seed().await.unwrap();
    customers.ensure_seed().await.unwrap();

    assert_eq!(customers.index().count().await.unwrap(), 5);
    assert!(customers.index().is_seeded().await.unwrap());
}

#[tokio::test]
async fn test_seed_is_not_repeated_after_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let backend: Arc<dyn crate::storage::Backend> = Arc::new(FsBackend::new(dir.path()));

    let first = IndexedEntity::<Policy>::new(EntityStore::new(Arc::clone(&backend)), 100);
    first.ensure_seed().await.unwrap();
    first.delete("pol_1").await.unwrap();

    // A fresh process sees the durable flag and leaves the deletion alone.
    let second = IndexedEntity::<Policy>::new(EntityStore::new(backend), 100);
    second.ensure_seed().await.unwrap();
    assert!(!second.exists("pol_1").await.unwrap());
    assert_eq!(second.index().count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_mutate_updates_existing_record() {
    let customers = IndexedEntity::<Customer>::new(store(), 100);
    customers.create(customer("cust_a")).await.unwrap();

    let updated = customers
        .mutate("cust_a", |mut c| {
            c.name = "Renamed".to_string();
            c
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(customers.find("cust_a").await.unwrap().name, "Renamed");
}

#[tokio::test]
async fn test_list_pages_follow_cursor() {
    let customers = IndexedEntity::<Customer>::new(store(), 2);
    for id in ["cust_1", "cust_2", "cust_3"] {
        customers.create(customer(id)).await.unwrap();
    }

    let first = customers.list(None, None).await.unwrap();
    assert_eq!(first.items.len(), 2);
    let cursor = first.next_cursor.unwrap();
    let second = customers.list(Some(&cursor), None).await.unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, "cust_3");
    assert!(second.next_cursor.is_none());
}

#[tokio::test]
async fn test_create_rolls_back_record_when_index_fails() {
    let backend = FailingIndexBackend::failing();
    let customers = IndexedEntity::<Customer>::new(EntityStore::new(backend.clone()), 100);

    let err = customers.create(customer("cust_a")).await.unwrap_err();
    assert!(matches!(err, EntityError::StorageError(StoreError::IoError(_))));
    assert!(!customers.exists("cust_a").await.unwrap());
    assert_eq!(customers.index().count().await.unwrap(), 0);

    backend.recover();
    customers.create(customer("cust_a")).await.unwrap();
    assert!(customers.exists("cust_a").await.unwrap());
}

#[tokio::test]
async fn test_failed_seed_leaves_flag_unset_and_retries() {
    let backend = FailingIndexBackend::failing();
    let customers = IndexedEntity::<Customer>::new(EntityStore::new(backend.clone()), 100);

    assert!(customers.ensure_seed().await.is_err());
    assert!(!customers.index().is_seeded().await.unwrap());
    for id in seed_ids::<Customer>() {
        assert!(!customers.exists(&id).await.unwrap(), "{id} survived the failed seed");
    }

    backend.recover();
    customers.ensure_seed().await.unwrap();
    assert!(customers.index().is_seeded().await.unwrap());
    assert_eq!(customers.index().count().await.unwrap(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_seeds_converge() {
    let customers = Arc::new(IndexedEntity::<Customer>::new(store(), 100));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let customers = Arc::clone(&customers);
            tokio::spawn(async move { customers.ensure_seed().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let ids = customers.index().list(None, None).await.unwrap().items;
    assert_eq!(ids, seed_ids::<Customer>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_seeding_from_two_handles_on_one_store() {
    let store = store();
    let first = Arc::new(IndexedEntity::<Policy>::new(store.clone(), 100));
    let second = Arc::new(IndexedEntity::<Policy>::new(store, 100));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let policies = if i % 2 == 0 { Arc::clone(&first) } else { Arc::clone(&second) };
            tokio::spawn(async move { policies.ensure_seed().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut ids = second.index().list(None, None).await.unwrap().items;
    ids.sort();
    let mut expected = seed_ids::<Policy>();
    expected.sort();
    assert_eq!(ids, expected);
    assert!(first.index().is_seeded().await.unwrap());
}
