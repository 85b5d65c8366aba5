//! One handle over everything LifeSync persists.

use std::sync::Arc;

use crate::error::StorageError;
use crate::log::{NoteBook, Preferences, SessionLog, TodoList};
use crate::stats::{Dashboard, WeeklySummary};
use crate::storage::{IdGenerator, KeyValueStore, MemoryStore, SqliteStore};

/// Sessions, notes, todos and preferences sharing one store and one id
/// sequence. Front ends construct one and pass it around explicitly.
pub struct Repository {
    pub sessions: SessionLog,
    pub notes: NoteBook,
    pub todos: TodoList,
    pub preferences: Preferences,
    store: Arc<dyn KeyValueStore>,
    ids: Arc<IdGenerator>,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("sessions", &self.sessions)
            .field("notes", &self.notes)
            .field("todos", &self.todos)
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// Load every collection from `store`.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            sessions: SessionLog::load(store.clone(), ids.clone()),
            notes: NoteBook::load(store.clone(), ids.clone()),
            todos: TodoList::load(store.clone(), ids.clone()),
            preferences: Preferences::new(store.clone()),
            store,
            ids,
        }
    }

    /// Repository over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStore::new()))
    }

    /// Repository over the SQLite database in the data directory.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::open(Arc::new(SqliteStore::open()?)))
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn ids(&self) -> &Arc<IdGenerator> {
        &self.ids
    }

    /// Re-read every collection, picking up writes from other processes.
    pub fn reload(&mut self) {
        self.sessions.reload();
        self.notes.reload();
        self.todos.reload();
    }

    pub fn weekly(&self) -> WeeklySummary {
        crate::stats::aggregate_local(self.sessions.list())
    }

    pub fn streak(&self) -> u32 {
        crate::stats::streak_local(self.sessions.list())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build_local(self.sessions.list())
    }
}
