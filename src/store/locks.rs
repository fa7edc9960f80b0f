//! Per-key critical sections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type Slots = Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>;

/// A table of async mutexes, one per storage address currently in use.
///
/// Entries are created on first lock and dropped again once no task holds or
/// waits on them, so the table only grows with the number of contended keys.
#[derive(Debug, Clone, Default)]
pub struct KeyedLocks {
    slots: Slots,
}

impl KeyedLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other task holds `key`, then hold it until the guard drops.
    pub async fn lock(&self, key: String) -> KeyGuard {
        let mutex = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key.clone()).or_default())
        };
        let guard = mutex.lock_owned().await;
        KeyGuard {
            key,
            guard: Some(guard),
            slots: Arc::clone(&self.slots),
        }
    }

    /// Number of keys with a live mutex.
    #[must_use]
    pub fn active(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Holds one key of a [`KeyedLocks`] table.
#[derive(Debug)]
pub struct KeyGuard {
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
    slots: Slots,
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        // Release first so the strong count below reflects waiters only.
        drop(self.guard.take());
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let idle = slots
            .get(&self.key)
            .is_some_and(|mutex| Arc::strong_count(mutex) == 1);
        if idle {
            slots.remove(&self.key);
        }
    }
}
