//! JSON flat-file record store with serialized transactions.
//!
//! [`JsonStore`] owns the single shared mutable resource in the system: the
//! persisted [`Snapshot`]. All mutations go through [`JsonStore::with_transaction`],
//! which provides mutual exclusion equivalent to a global lock over the
//! store — one check-then-act sequence runs to completion before the next
//! begins. Reads ([`JsonStore::read`]) return the last-committed snapshot
//! and never block writers for longer than a clone.
//!
//! Durability: every successful transaction is written to disk via a
//! temp-file write followed by an atomic rename, so a crash mid-commit
//! leaves the previous file intact. A transaction that fails — whether the
//! closure returned a domain error or the write itself failed — publishes
//! nothing: the in-memory snapshot and the file both stay exactly as they
//! were.

use std::path::{Path, PathBuf};

use patisserie_core::Snapshot;
use tokio::sync::Mutex;

/// Failure of the durable medium. Non-retryable at this layer; the API
/// maps it to a 5xx response and the caller may retry externally.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("Stored snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Flat-file store holding the last-committed snapshot in memory.
pub struct JsonStore {
    path: PathBuf,
    /// Last durably committed snapshot. The mutex is the transaction
    /// coordinator: holding it is holding the store's write lock.
    snapshot: Mutex<Snapshot>,
}

impl JsonStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// snapshot file if none exists yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let snapshot = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            let empty = Snapshot::default();
            write_snapshot(&path, &empty)?;
            empty
        };

        tracing::info!(path = %path.display(), "Opened store");
        Ok(JsonStore {
            path,
            snapshot: Mutex::new(snapshot),
        })
    }

    /// Clone of the last-committed snapshot, for read-only queries.
    ///
    /// Must not be used as the sole basis for a write decision; re-check
    /// inside [`Self::with_transaction`] instead.
    pub async fn read(&self) -> Snapshot {
        self.snapshot.lock().await.clone()
    }

    /// Run one exclusive, atomic read-modify-write transaction.
    ///
    /// The closure receives a working copy of the current snapshot. If it
    /// returns `Ok`, the copy is persisted and becomes the committed state;
    /// if it returns `Err`, or the write fails, the prior snapshot remains
    /// in force and the error propagates unchanged.
    pub async fn with_transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Snapshot) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut committed = self.snapshot.lock().await;
        let mut working = committed.clone();

        let out = f(&mut working)?;

        write_snapshot(&self.path, &working).map_err(E::from)?;
        *committed = working;

        tracing::debug!(path = %self.path.display(), "Transaction committed");
        Ok(out)
    }
}

/// Serialize and durably write a snapshot: temp file, then atomic rename.
fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(snapshot)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, raw)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use patisserie_core::booking;
    use patisserie_core::identity::{Identity, ROLE_CUSTOMER};
    use patisserie_core::model::{Cake, Decision};
    use patisserie_core::CoreError;

    /// Transaction error type used by tests; mirrors how the API layer
    /// combines domain and storage failures.
    #[derive(Debug, thiserror::Error)]
    enum TxError {
        #[error(transparent)]
        Store(#[from] StoreError),
        #[error(transparent)]
        Core(#[from] CoreError),
    }

    fn sample_cake(id: &str) -> Cake {
        Cake {
            id: id.into(),
            name: "Tarte au citron".into(),
            price: 25,
            image: "images/cake3.jpg".into(),
            description: "Meringue italienne".into(),
        }
    }

    fn customer(id: &str) -> Identity {
        Identity {
            id: id.into(),
            display_name: format!("user-{id}"),
            role: ROLE_CUSTOMER.into(),
        }
    }

    #[tokio::test]
    async fn test_open_initializes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/database.json");

        let store = JsonStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.read().await.cakes.is_empty());
    }

    #[tokio::test]
    async fn test_commit_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");

        let store = JsonStore::open(&path).unwrap();
        store
            .with_transaction::<_, StoreError, _>(|snapshot| {
                snapshot.cakes.push(sample_cake("c1"));
                Ok(())
            })
            .await
            .unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        let snapshot = reopened.read().await;
        assert_eq!(snapshot.cakes.len(), 1);
        assert_eq!(snapshot.cakes[0].name, "Tarte au citron");
    }

    #[tokio::test]
    async fn test_failed_closure_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonStore::open(&path).unwrap();

        let result: Result<(), TxError> = store
            .with_transaction(|snapshot| {
                // Mutate, then fail: nothing below may stick.
                snapshot.cakes.push(sample_cake("c1"));
                Err(CoreError::Validation("boom".into()).into())
            })
            .await;

        assert!(matches!(result, Err(TxError::Core(_))));
        assert!(store.read().await.cakes.is_empty());

        // The file on disk is untouched as well.
        let reopened = JsonStore::open(&path).unwrap();
        assert!(reopened.read().await.cakes.is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonStore::open(&path).unwrap();

        store
            .with_transaction::<_, StoreError, _>(|snapshot| {
                snapshot.cakes.push(sample_cake("c1"));
                Ok(())
            })
            .await
            .unwrap();

        // Force the commit write to fail: the data path becomes a
        // directory, so the rename cannot replace it (works even as root,
        // unlike permission tricks).
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result: Result<(), TxError> = store
            .with_transaction(|snapshot| {
                snapshot.cakes.push(sample_cake("c2"));
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(TxError::Store(StoreError::Unavailable(_)))));
        // In-memory state still reflects the last successful commit only.
        assert_eq!(store.read().await.cakes.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_transactions_serialize() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path().join("database.json")).unwrap());

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .with_transaction::<_, StoreError, _>(move |snapshot| {
                        // Classic lost-update shape: read length, then push.
                        let next = snapshot.cakes.len();
                        snapshot.cakes.push(sample_cake(&format!("c{next}-{i}")));
                        Ok(())
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.read().await.cakes.len(), 10);
    }

    #[tokio::test]
    async fn test_concurrent_accepts_block_date_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path().join("database.json")).unwrap());
        let date: chrono::NaiveDate = "2025-06-01".parse().unwrap();

        // Two pending reservations for the same (cake, date).
        let ids: Vec<String> = store
            .with_transaction::<_, TxError, _>(|snapshot| {
                snapshot.cakes.push(sample_cake("c1"));
                let r1 = booking::create_reservation(snapshot, &customer("a"), "c1", date)?;
                let r2 = booking::create_reservation(snapshot, &customer("b"), "c1", date)?;
                Ok(vec![r1.id, r2.id])
            })
            .await
            .unwrap();

        let mut handles = Vec::new();
        for id in ids {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .with_transaction::<_, TxError, _>(move |snapshot| {
                        booking::decide_reservation(snapshot, &id, Decision::Accepted)
                            .map_err(TxError::from)
                    })
                    .await
            }));
        }

        let mut accepted = 0;
        let mut unavailable = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(TxError::Core(CoreError::DateUnavailable { .. })) => unavailable += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(unavailable, 1);
        assert_eq!(store.read().await.blocked_dates.len(), 1);
    }
}
