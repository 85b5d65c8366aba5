use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::lenient_id;
use crate::storage::{IdGenerator, KeyValueStore, PersistedList, NOTES_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// Quick notes, most recent first.
#[derive(Debug)]
pub struct NoteBook {
    list: PersistedList<Note>,
    ids: Arc<IdGenerator>,
}

impl NoteBook {
    pub fn load(store: Arc<dyn KeyValueStore>, ids: Arc<IdGenerator>) -> Self {
        let list: PersistedList<Note> = PersistedList::load(store, NOTES_KEY);
        for note in list.items() {
            ids.observe(note.id);
        }
        Self { list, ids }
    }

    /// Add a trimmed note at the head. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Note> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.add_raw(text))
    }

    /// Add `text` verbatim at the head.
    pub fn add_raw(&mut self, text: &str) -> Note {
        let note = Note {
            id: self.ids.next_id(),
            text: text.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.list.update(|items| items.insert(0, note.clone()));
        note
    }

    pub fn list(&self) -> &[Note] {
        self.list.items()
    }

    pub fn remove(&mut self, id: i64) -> bool {
        self.list.update(|items| {
            let before = items.len();
            items.retain(|n| n.id != id);
            items.len() != before
        })
    }

    /// Delete every note, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        self.list.update(|items| std::mem::take(items).len())
    }

    pub fn reload(&mut self) {
        self.list.reload();
    }
}
