//! Generic in-memory record store.
//!
//! `RecordStore` replaces one hand-rolled list-plus-counter per program. It
//! owns the records in insertion order and hands out identifiers from a
//! monotonic counter.
//!
//! Invariants:
//! - Identifiers start at 1, are unique within a store and are never reused,
//!   even after the record holding one is removed.
//! - The store never validates; callers validate every field before calling
//!   [`RecordStore::insert_with`] or mutating through [`RecordStore::require_mut`].

use tracing::debug;

use crate::error::{Result, TallyError};

/// Synthetic record identifier.
pub type RecordId = u32;

/// A record that can live in a [`RecordStore`].
pub trait Record {
    /// Identifier assigned by the store at creation.
    fn id(&self) -> RecordId;
}

/// Ordered collection of records with identifier-based lookup.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    kind: &'static str,
    records: Vec<R>,
    next_id: RecordId,
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store. `kind` names the record type in not-found errors.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Record type label, e.g. `"contact"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Assign the next identifier, build the record with it and append it.
    pub fn insert_with<F>(&mut self, build: F) -> &R
    where
        F: FnOnce(RecordId) -> R,
    {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        debug_assert_eq!(record.id(), id, "record must carry the assigned id");
        debug!(kind = self.kind, id, "record inserted");

        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// Look up a record. Absence is not an error here.
    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Look up a record for mutation.
    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Look up a record for mutation, failing with `NotFound` when absent.
    pub fn require_mut(&mut self, id: RecordId) -> Result<&mut R> {
        let kind = self.kind;
        self.find_mut(id).ok_or(TallyError::NotFound { kind, id })
    }

    /// Remove the record with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: RecordId) -> Result<R> {
        let position = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(TallyError::NotFound {
                kind: self.kind,
                id,
            })?;
        debug!(kind = self.kind, id, "record removed");
        Ok(self.records.remove(position))
    }

    /// Records matching `predicate`, in insertion order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&R>
    where
        P: FnMut(&R) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier the next insert will receive.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: RecordId,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn store_with(labels: &[&str]) -> RecordStore<Item> {
        let mut store = RecordStore::new("item");
        for label in labels {
            store.insert_with(|id| Item {
                id,
                label: label.to_string(),
            });
        }
        store
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<RecordId> = store.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut store = store_with(&["a", "b"]);
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.label, "b");

        let next = store.insert_with(|id| Item {
            id,
            label: "c".to_string(),
        });
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let mut store = store_with(&["a", "b"]);
        let err = store.remove(9).unwrap_err();
        assert_eq!(err, TallyError::NotFound { kind: "item", id: 9 });
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = store_with(&["a", "b", "c"]);
        store.remove(2).unwrap();
        let labels: Vec<&str> = store.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "c"]);
    }

    #[test]
    fn test_require_mut_reports_kind() {
        let mut store = store_with(&["a"]);
        store.require_mut(1).unwrap().label = "z".to_string();
        assert_eq!(store.find(1).unwrap().label, "z");
        assert!(store.require_mut(5).unwrap_err().is_not_found());
    }

    #[test]
    fn test_filter_keeps_insertion_order() {
        let store = store_with(&["apple", "kiwi", "avocado"]);
        let hits = store.filter(|item| item.label.starts_with('a'));
        let ids: Vec<RecordId> = hits.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_empty_store() {
        let store: RecordStore<Item> = RecordStore::new("item");
        assert!(store.is_empty());
        assert!(store.find(1).is_none());
        assert_eq!(store.kind(), "item");
    }
}
