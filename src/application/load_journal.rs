//! Load the in-memory journal from its store

use crate::domain::Journal;
use crate::error::Result;
use crate::infrastructure::JournalStore;

/// Read every stored entry, in append order, into a fresh journal.
pub fn load_journal<S: JournalStore>(store: &S) -> Result<Journal> {
    store.load().map(Journal::from_entries)
}
