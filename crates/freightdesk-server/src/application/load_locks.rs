//! Per-load mutual exclusion
//!
//! Every mutation of a load (negotiation acceptance, booking) holds the
//! load's lock across read, check and write. An entry lives only while some
//! caller holds or waits for it.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<String, Arc<Mutex<()>>>;

#[derive(Default)]
pub struct LoadLocks {
    locks: Arc<LockMap>,
}

/// Exclusive access to one load, released on drop
pub struct LoadGuard {
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
    load_id: String,
}

impl LoadLocks {
    /// Wait for exclusive access to one load
    pub async fn acquire(&self, load_id: &str) -> LoadGuard {
        let lock = self
            .locks
            .entry(load_id.to_string())
            .or_default()
            .value()
            .clone();

        LoadGuard {
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
            load_id: load_id.to_string(),
        }
    }

    /// Loads currently held or awaited
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locks.len()
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        // Unlock first: an idle entry is then referenced by the map alone
        drop(self.guard.take());
        self.locks.remove_if(&self.load_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_load_is_exclusive() {
        let locks = Arc::new(LoadLocks::default());
        let guard = locks.acquire("L001").await;

        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire("L001").await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_different_loads_do_not_block() {
        let locks = LoadLocks::default();
        let _a = locks.acquire("L001").await;
        let b = tokio::time::timeout(Duration::from_millis(100), locks.acquire("L002")).await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn test_released_entries_are_evicted() {
        let locks = LoadLocks::default();
        for i in 0..1000 {
            let _guard = locks.acquire(&format!("L{i}")).await;
        }
        assert_eq!(locks.len(), 0);
    }

    #[tokio::test]
    async fn test_entry_kept_while_awaited() {
        let locks = Arc::new(LoadLocks::default());
        let guard = locks.acquire("L001").await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire("L001").await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Released while a waiter still references the entry
        drop(guard);
        assert_eq!(locks.len(), 1);

        waiter.await.unwrap();
        assert_eq!(locks.len(), 0);
    }
}
