//! Best-effort JSON list persistence.
//!
//! A [`PersistedList`] mirrors a `Vec<T>` into a [`KeyValueStore`] under one
//! key. Reads that fail or return corrupt JSON yield an empty list; writes
//! that fail are logged and dropped.
//!
//! Every [`PersistedList::update`] re-reads the stored list first, so
//! several handles over one store never overwrite each other's writes.
//! After a failed write the in-memory list is ahead of storage and is
//! kept as-is until a write succeeds again.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::KeyValueStore;

pub struct PersistedList<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    items: Vec<T>,
    synced: bool,
}

impl<T: std::fmt::Debug> std::fmt::Debug for PersistedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedList")
            .field("key", &self.key)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T> PersistedList<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the list stored under `key`.
    pub fn load(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let items = read_items(store.as_ref(), key);
        Self {
            store,
            key,
            items,
            synced: true,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Re-read from storage, picking up writes made by other handles.
    /// Keeps the current items if storage cannot be read.
    pub fn reload(&mut self) {
        match self.store.get(self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => self.items = items,
                Err(e) => tracing::warn!(key = self.key, "ignoring corrupt stored list: {e}"),
            },
            Ok(None) => self.items.clear(),
            Err(e) => tracing::warn!(key = self.key, "failed to reload stored list: {e}"),
        }
    }

    /// Apply `f` to the freshly stored items and persist the result.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        if self.synced {
            self.reload();
        }
        let result = f(&mut self.items);
        self.synced = self.save();
        result
    }

    fn save(&self) -> bool {
        let raw = match serde_json::to_string(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = self.key, "failed to serialize list: {e}");
                return false;
            }
        };
        match self.store.set(self.key, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = self.key, "failed to persist list: {e}");
                false
            }
        }
    }
}

fn read_items<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, "ignoring corrupt stored list: {e}");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(key, "failed to read stored list: {e}");
            Vec::new()
        }
    }
}
