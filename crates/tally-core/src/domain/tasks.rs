//! To-do list.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::reportable_display;
use crate::store::{Record, RecordId, RecordStore};
use crate::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: RecordId,
    pub description: String,
    pub completed: bool,
}

impl Record for Task {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] {}. {}", mark, self.id, self.description)
    }
}

reportable_display!(Task);

#[derive(Debug, Clone)]
pub struct TaskList {
    store: RecordStore<Task>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new("task"),
        }
    }

    pub fn add(&mut self, description: &str) -> Result<&Task> {
        let description = validate_not_blank("description", description)?;
        Ok(self.store.insert_with(|id| Task {
            id,
            description: description.trim().to_string(),
            completed: false,
        }))
    }

    /// Mark a task done. Completing a finished task is a no-op.
    pub fn complete(&mut self, id: RecordId) -> Result<&Task> {
        let task = self.store.require_mut(id)?;
        if !task.completed {
            task.completed = true;
            debug!(id, "task completed");
        }
        Ok(&*task)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<Task> {
        self.store.remove(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.store.iter()
    }

    pub fn pending(&self) -> usize {
        self.store.iter().filter(|task| !task.completed).count()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
