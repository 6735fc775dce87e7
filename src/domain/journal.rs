//! In-memory journal: the caller-owned, append-only entry collection

use crate::domain::entry::Entry;

/// Entries in insertion order (not necessarily sorted by date)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    /// Wrap entries loaded from a store, keeping their order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Journal { entries }
    }

    /// Append an entry. Callers persist it first so memory never runs ahead
    /// of the store.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The `n` most recently recorded entries, oldest first
    pub fn latest(&self, n: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
