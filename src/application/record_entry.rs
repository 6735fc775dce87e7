//! Record entry use case

use crate::application::load_journal::load_journal;
use crate::domain::{Entry, Journal};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use chrono::NaiveDate;

/// Scores new entries and appends them to both the store and the in-memory
/// journal. The journal only grows after the store write succeeded.
pub struct RecordEntryService<S: JournalStore> {
    store: S,
    journal: Journal,
}

impl<S: JournalStore> RecordEntryService<S> {
    /// Load the existing journal from `store`
    pub fn open(store: S) -> Result<Self> {
        let journal = load_journal(&store)?;
        Ok(RecordEntryService { store, journal })
    }

    /// Analyze `text`, date it (falling back to `today`), persist it and
    /// remember it. Empty text is rejected with no state change.
    pub fn execute(&mut self, date_input: &str, text: &str, today: NaiveDate) -> Result<Entry> {
        let entry = Entry::analyze(date_input, text, today)?;

        self.store.append(&entry)?;
        self.journal.push(entry.clone());

        tracing::info!(
            date = %entry.date,
            compound = entry.compound,
            emotion = %entry.emotion(),
            "recorded entry"
        );
        Ok(entry)
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn into_journal(self) -> Journal {
        self.journal
    }
}
