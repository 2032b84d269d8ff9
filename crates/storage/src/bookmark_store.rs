//! Bookmark persistence contract.
//!
//! The in-memory set is the source of truth for the session. Storage failures
//! are logged and reported to the caller but never roll back a toggle.

use std::sync::{Arc, Mutex, PoisonError};

use api_explorer_core::{BOOKMARKS_STORAGE_KEY, BookmarkSet};

use crate::error::PersistenceError;
use crate::kv::KeyValueStore;

/// Read the persisted bookmark list.
///
/// Missing key yields an empty set. Read or decode failures also yield an
/// empty set and are only logged.
#[must_use]
pub fn restore_bookmarks(kv: &dyn KeyValueStore, key: &str) -> BookmarkSet {
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BookmarkSet::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read bookmarks, starting empty");
            return BookmarkSet::new();
        },
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => BookmarkSet::from_ids(ids),
        Err(e) => {
            tracing::warn!(key, error = %e, "persisted bookmarks are corrupt, starting empty");
            BookmarkSet::new()
        },
    }
}

/// Serialize `set` as a JSON array of ids and write it under `key`.
pub fn persist_bookmarks(
    kv: &dyn KeyValueStore,
    key: &str,
    set: &BookmarkSet,
) -> Result<(), PersistenceError> {
    let body = serde_json::to_string(set)?;
    kv.set(key, &body)
}

/// Result of a bookmark toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Set after the toggle.
    pub bookmarks: BookmarkSet,
    pub is_bookmarked: bool,
    /// `false` when the write to storage failed; the toggle still stands.
    pub persisted: bool,
}

/// Snapshot of the bookmark set waiting to be written.
///
/// Taken under the caller's lock and committed after it is released. Commits
/// are ordered by generation: a snapshot older than one already written is
/// skipped.
pub struct PendingWrite {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    set: BookmarkSet,
    generation: u64,
    written: Arc<Mutex<u64>>,
}

impl PendingWrite {
    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.set
    }

    pub fn commit(&self) -> Result<(), PersistenceError> {
        let mut written = self.written.lock().unwrap_or_else(PoisonError::into_inner);
        if *written > self.generation {
            tracing::debug!(generation = self.generation, latest = *written, "skipping stale bookmark write");
            return Ok(());
        }
        persist_bookmarks(self.kv.as_ref(), &self.key, &self.set)?;
        *written = self.generation;
        Ok(())
    }

    /// Commit and fold a failure into `false` with a warning.
    #[must_use]
    pub fn commit_best_effort(&self) -> bool {
        match self.commit() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to persist bookmarks, keeping in-memory state");
                false
            },
        }
    }
}

/// Bookmark set bound to its backing store.
pub struct BookmarkStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    set: BookmarkSet,
    generation: u64,
    written: Arc<Mutex<u64>>,
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore").field("key", &self.key).field("set", &self.set).finish()
    }
}

impl BookmarkStore {
    /// Restore from `kv` under the default key.
    #[must_use]
    pub fn restore(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::restore_with_key(kv, BOOKMARKS_STORAGE_KEY)
    }

    #[must_use]
    pub fn restore_with_key(kv: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let set = restore_bookmarks(kv.as_ref(), key);
        tracing::debug!(key, count = set.len(), "restored bookmarks");
        Self { kv, key: key.to_owned(), set, generation: 0, written: Arc::new(Mutex::new(0)) }
    }

    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.set
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    /// Flip membership of `id`, then persist on a best-effort basis.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let (is_bookmarked, write) = self.toggle_deferred(id);
        let persisted = write.commit_best_effort();
        ToggleOutcome { bookmarks: self.set.clone(), is_bookmarked, persisted }
    }

    /// Flip membership of `id` in memory only and hand back the write to
    /// perform. Returns whether `id` is bookmarked afterwards.
    pub fn toggle_deferred(&mut self, id: &str) -> (bool, PendingWrite) {
        let is_bookmarked = self.set.toggle(id);
        self.generation += 1;
        (is_bookmarked, self.pending_write())
    }

    pub fn persist(&self) -> Result<(), PersistenceError> {
        self.pending_write().commit()
    }

    fn pending_write(&self) -> PendingWrite {
        PendingWrite {
            kv: Arc::clone(&self.kv),
            key: self.key.clone(),
            set: self.set.clone(),
            generation: self.generation,
            written: Arc::clone(&self.written),
        }
    }
}
