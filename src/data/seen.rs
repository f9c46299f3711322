//! Durable set of already-processed event identities.
//!
//! The rank tracker uses this store to suppress redelivery of audit-log events
//! it has already forwarded. The set grows monotonically for the life of the
//! process (no eviction) and is flushed to disk synchronously on every
//! admission, so a crash loses at most the identity currently being admitted.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Membership test and durable insert for event identities.
///
/// The poll loop only depends on this trait, so the backing medium (flat file,
/// embedded database, key-value service) is swappable without touching loop
/// logic. A store has exactly one owner; there is no internal locking.
pub trait SeenStore {
    fn contains(&self, id: &str) -> bool;

    /// Admits an identity, flushing it durably before returning.
    ///
    /// Idempotent: admitting an identity that is already present leaves the
    /// set unchanged.
    fn admit(&mut self, id: &str) -> Result<(), AppError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `SeenStore` backed by a JSON array file mirrored in memory.
///
/// The whole file is rewritten on each admission (write-through, not batched),
/// matching the durability contract: after `admit` returns, a process restart
/// observes the identity as already seen.
pub struct FileSeenStore {
    path: PathBuf,
    seen: HashSet<String>,
}

impl FileSeenStore {
    /// Opens the store at `path`, creating an empty backing file if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let seen = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let ids: Vec<String> = serde_json::from_str(&contents)?;
            ids.into_iter().collect()
        } else {
            fs::write(&path, serde_json::to_string(&Vec::<String>::new())?)?;
            HashSet::new()
        };

        tracing::info!(
            "Loaded {} processed log entries from {}",
            seen.len(),
            path.display()
        );

        Ok(Self { path, seen })
    }

    fn flush(&self) -> Result<(), AppError> {
        let ids: Vec<&String> = self.seen.iter().collect();
        fs::write(&self.path, serde_json::to_string(&ids)?)?;
        Ok(())
    }
}

impl SeenStore for FileSeenStore {
    fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    fn admit(&mut self, id: &str) -> Result<(), AppError> {
        if self.seen.insert(id.to_string()) {
            self.flush()?;
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Tests that opening a store with no backing file creates an empty one.
    ///
    /// Expected: empty store and an empty JSON array on disk
    #[test]
    fn open_creates_empty_file_when_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("processed_logs.json");

        let store = FileSeenStore::open(&path).unwrap();

        assert!(store.is_empty());
        let contents = fs::read_to_string(&path).unwrap();
        let ids: Vec<String> = serde_json::from_str(&contents).unwrap();
        assert!(ids.is_empty());
    }

    /// Tests that admission is idempotent.
    ///
    /// Admitting the same identity twice must leave the set with the identity
    /// present exactly once.
    ///
    /// Expected: len == 1 after the second admit
    #[test]
    fn admit_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSeenStore::open(dir.path().join("seen.json")).unwrap();

        store.admit("42-1700000000000").unwrap();
        store.admit("42-1700000000000").unwrap();

        assert!(store.contains("42-1700000000000"));
        assert_eq!(store.len(), 1);
    }

    /// Tests that admitted identities survive a simulated restart.
    ///
    /// A second store opened on the same path must report previously admitted
    /// identities as already seen.
    ///
    /// Expected: contains(id) == true after reopen
    #[test]
    fn admitted_ids_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen.json");

        let mut store = FileSeenStore::open(&path).unwrap();
        store.admit("42-1700000000000").unwrap();
        store.admit("7-1700000000500").unwrap();
        drop(store);

        let reopened = FileSeenStore::open(&path).unwrap();
        assert!(reopened.contains("42-1700000000000"));
        assert!(reopened.contains("7-1700000000500"));
        assert_eq!(reopened.len(), 2);
    }

    /// Tests that unknown identities are reported as unseen.
    ///
    /// Expected: contains == false
    #[test]
    fn contains_is_false_for_unknown_id() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSeenStore::open(dir.path().join("seen.json")).unwrap();

        store.admit("42-1700000000000").unwrap();

        assert!(!store.contains("42-1700000000001"));
    }
}
