//! Timestamped notes with search, importance flag and text export.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Result, TallyError};
use crate::reportable_display;
use crate::store::{Record, RecordId, RecordStore};
use crate::validation::validate_not_blank;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub important: bool,
}

impl Record for Note {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.important { " [!]" } else { "" };
        write!(
            f,
            "#{} {}{} ({}): {}",
            self.id,
            self.title,
            flag,
            self.created_at.format(TIMESTAMP_FORMAT),
            self.content
        )
    }
}

reportable_display!(Note);

#[derive(Debug, Clone)]
pub struct NoteBook {
    store: RecordStore<Note>,
}

impl Default for NoteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteBook {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new("note"),
        }
    }

    /// Create a note stamped with the current time.
    pub fn create(&mut self, title: &str, content: &str) -> Result<&Note> {
        self.create_at(title, content, Utc::now())
    }

    pub fn create_at(&mut self, title: &str, content: &str, created_at: DateTime<Utc>) -> Result<&Note> {
        let title = validate_not_blank("title", title)?;
        let content = validate_not_blank("content", content)?;
        Ok(self.store.insert_with(|id| Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at,
            important: false,
        }))
    }

    pub fn get(&self, id: RecordId) -> Option<&Note> {
        self.store.find(id)
    }

    /// Notes oldest first; equal timestamps keep insertion order.
    pub fn by_creation(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.store.iter().collect();
        notes.sort_by_key(|note| note.created_at);
        notes
    }

    /// Case-insensitive match against title or content.
    pub fn search(&self, term: &str) -> Result<Vec<&Note>> {
        if term.trim().is_empty() {
            return Err(TallyError::EmptyArgument { field: "search term" });
        }
        let needle = term.to_lowercase();
        let found = self.store.filter(|note| {
            note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
        });
        if found.is_empty() {
            return Err(TallyError::NoMatches(format!("'{}'", term)));
        }
        Ok(found)
    }

    /// Replace title and content. A blank argument keeps the current value.
    pub fn edit(&mut self, id: RecordId, title: &str, content: &str) -> Result<&Note> {
        let note = self.store.require_mut(id)?;
        if !title.trim().is_empty() {
            note.title = title.to_string();
        }
        if !content.trim().is_empty() {
            note.content = content.to_string();
        }
        debug!(id, "note edited");
        Ok(&*note)
    }

    pub fn toggle_important(&mut self, id: RecordId) -> Result<bool> {
        let note = self.store.require_mut(id)?;
        note.important = !note.important;
        debug!(id, important = note.important, "importance toggled");
        Ok(note.important)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<Note> {
        self.store.remove(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Render every note in creation order under a dated header.
    pub fn export_text(&self, now: DateTime<Utc>) -> Result<String> {
        if self.store.is_empty() {
            return Err(TallyError::EmptyCollection("note book"));
        }
        let mut out = format!("=== NOTES EXPORT ({}) ===\n", now.format(TIMESTAMP_FORMAT));
        for note in self.by_creation() {
            out.push('\n');
            let marker = if note.important { " [IMPORTANT]" } else { "" };
            out.push_str(&format!("[{}] {}{}\n", note.id, note.title, marker));
            out.push_str(&format!("Created: {}\n", note.created_at.format(TIMESTAMP_FORMAT)));
            out.push_str(&note.content);
            out.push('\n');
        }
        out.push_str(&format!("\nTotal notes: {}\n", self.len()));
        Ok(out)
    }
}
