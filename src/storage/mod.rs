//! Raw keyed storage shared by the entity store and the indexes.
//!
//! A backend is a flat map of `(namespace, key) -> bytes`. One namespace holds
//! one entity kind; every record lives under its own key so it can be read,
//! replaced, and removed independently of its siblings.

mod error;
mod fs;
mod memory;

pub use error::StoreError;
pub use fs::FsBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;

/// Durable byte storage addressed by namespace and key.
///
/// Implementations only need single-operation atomicity; read-modify-write
/// sequences are serialized one level up, in [`crate::store::EntityStore`].
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Read the bytes stored under `key`, or `None` if nothing is stored.
    /// A key that fails [`is_valid_key`] is reported as absent.
    async fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `bytes` under `key`, replacing any previous value.
    /// Fails with [`StoreError::InvalidKey`] for a key that fails [`is_valid_key`].
    async fn write(&self, namespace: &str, key: &str, bytes: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key`. Returns whether a value was actually removed.
    async fn remove(&self, namespace: &str, key: &str) -> Result<bool, StoreError>;

    /// Whether a value is stored under `key`.
    async fn contains(&self, namespace: &str, key: &str) -> Result<bool, StoreError>;
}

/// Whether `key` is usable as a storage key: non-empty, at most 200 bytes,
/// no leading dot, and no path separators or NUL.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !(key.is_empty()
        || key.starts_with('.')
        || key.contains(&['/', '\\', '\0'][..])
        || key.len() > 200)
}

/// Reject keys that are empty or could escape their namespace directory.
///
/// Only writes reject a bad key. Lookups treat it as absent, since nothing
/// can ever have been stored under it.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_prefixed_ids() {
        assert!(validate_key("cust_1").is_ok());
        assert!(validate_key("pol_6f1c9a52-0d3e-4c1b-9a53-2b1f0e0f6d11").is_ok());
        assert!(validate_key("u1").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_traversal() {
        assert!(matches!(validate_key(".."), Err(StoreError::InvalidKey(_))));
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a\\b").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn test_validate_key_rejects_empty_and_oversized() {
        assert!(validate_key("").is_err());
        assert!(validate_key(&"x".repeat(201)).is_err());
        assert!(validate_key(&"x".repeat(200)).is_ok());
    }

    #[test]
    fn test_is_valid_key_matches_validate_key() {
        for key in ["cust_1", "_index", "", ".x", "a/b", "a\\b", "a\0b"] {
            assert_eq!(is_valid_key(key), validate_key(key).is_ok(), "{key:?}");
        }
    }
}
