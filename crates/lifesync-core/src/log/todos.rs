use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::lenient_id;
use crate::error::ValidationError;
use crate::storage::{IdGenerator, KeyValueStore, PersistedList, TODOS_KEY};

/// Longest accepted task description, in characters.
pub const MAX_TASK_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Partial update for [`TodoList::patch`]. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Task list in insertion order.
#[derive(Debug)]
pub struct TodoList {
    list: PersistedList<Todo>,
    ids: Arc<IdGenerator>,
}

impl TodoList {
    pub fn load(store: Arc<dyn KeyValueStore>, ids: Arc<IdGenerator>) -> Self {
        let list: PersistedList<Todo> = PersistedList::load(store, TODOS_KEY);
        for todo in list.items() {
            ids.observe(todo.id);
        }
        Self { list, ids }
    }

    /// Check a task description without adding it.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyTask`] for blank text and
    /// [`ValidationError::TaskTooLong`] past [`MAX_TASK_LEN`] characters.
    pub fn validate(text: &str) -> Result<&str, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        if trimmed.chars().count() > MAX_TASK_LEN {
            return Err(ValidationError::TaskTooLong { max: MAX_TASK_LEN });
        }
        Ok(trimmed)
    }

    /// Validate and append a new pending task.
    ///
    /// # Errors
    /// See [`TodoList::validate`]. Nothing is added on error.
    pub fn add(&mut self, text: &str) -> Result<Todo, ValidationError> {
        let text = Self::validate(text)?;
        Ok(self.add_raw(text))
    }

    /// Append `text` verbatim as a pending task.
    pub fn add_raw(&mut self, text: &str) -> Todo {
        let todo = Todo {
            id: self.ids.next_id(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.list.update(|items| items.push(todo.clone()));
        todo
    }

    pub fn list(&self) -> &[Todo] {
        self.list.items()
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.list.items().iter().find(|t| t.id == id)
    }

    /// Flip completion. Returns the updated task, or `None` if absent.
    pub fn toggle(&mut self, id: i64) -> Option<Todo> {
        let completed = !self.get(id)?.completed;
        self.patch(
            id,
            TodoPatch {
                completed: Some(completed),
                ..TodoPatch::default()
            },
        )
    }

    /// Merge `patch` into the task with `id`.
    pub fn patch(&mut self, id: i64, patch: TodoPatch) -> Option<Todo> {
        self.get(id)?;
        self.list.update(|items| {
            let todo = items.iter_mut().find(|t| t.id == id)?;
            if let Some(text) = patch.text {
                todo.text = text;
            }
            if let Some(completed) = patch.completed {
                todo.completed = completed;
            }
            Some(todo.clone())
        })
    }

    pub fn remove(&mut self, id: i64) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.list.update(|items| items.retain(|t| t.id != id));
        true
    }

    /// Drop completed tasks, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        self.list.update(|items| {
            let before = items.len();
            items.retain(|t| !t.completed);
            before - items.len()
        })
    }

    pub fn counts(&self) -> TodoCounts {
        let total = self.list.items().len();
        let completed = self.list.items().iter().filter(|t| t.completed).count();
        TodoCounts {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn reload(&mut self) {
        self.list.reload();
    }
}
