//! Durable entry storage
//!
//! The CSV layout is column-stable:
//! `date,entry,compound,positive,negative,neutral,emotion,color`.

use crate::domain::{Emotion, Entry, DATE_FORMAT};
use crate::error::{MoodjourError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Append-only entry storage
pub trait JournalStore {
    /// All stored entries in the order they were appended
    fn load(&self) -> Result<Vec<Entry>>;

    /// Durably append one entry
    fn append(&mut self, entry: &Entry) -> Result<()>;
}

/// One CSV row as persisted
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    date: String,
    entry: String,
    compound: f64,
    positive: f64,
    negative: f64,
    neutral: f64,
    emotion: String,
    color: String,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        let emotion = entry.emotion();
        EntryRecord {
            date: entry.date.format(DATE_FORMAT).to_string(),
            entry: entry.text.clone(),
            compound: entry.compound,
            positive: entry.positive,
            negative: entry.negative,
            neutral: entry.neutral,
            emotion: emotion.label().to_string(),
            color: emotion.color().to_string(),
        }
    }
}

impl EntryRecord {
    /// Rebuild an entry; the stored label and colour are not trusted and are
    /// re-derived from the compound score.
    fn into_entry(self) -> std::result::Result<Entry, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|e| format!("invalid date '{}': {}", self.date, e))?;
        if !self.compound.is_finite() {
            return Err(format!("invalid compound score {}", self.compound));
        }

        let entry = Entry {
            date,
            text: self.entry,
            compound: self.compound,
            positive: self.positive,
            negative: self.negative,
            neutral: self.neutral,
        };

        match self.emotion.parse::<Emotion>() {
            Ok(stored) if stored != entry.emotion() => {
                tracing::warn!(
                    date = %entry.date,
                    stored = %stored,
                    derived = %entry.emotion(),
                    "stored emotion disagrees with compound score; using derived"
                );
            }
            Err(e) => tracing::debug!(error = %e, "ignoring stored emotion label"),
            Ok(_) => {}
        }

        Ok(entry)
    }
}

/// CSV file implementation of JournalStore
#[derive(Debug, Clone)]
pub struct CsvJournalStore {
    path: PathBuf,
}

impl CsvJournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvJournalStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, action: &str, err: impl std::fmt::Display) -> MoodjourError {
        MoodjourError::Persistence(format!(
            "failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

/// Add a newline when the file does not end with one, so the next record
/// starts on its own row. Writes go to the end in append mode.
fn terminate_last_line(file: &mut File) -> io::Result<()> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}

impl JournalStore for CsvJournalStore {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no journal file yet");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| self.persistence_error("open", e))?;
        let mut reader = csv::Reader::from_reader(file);
        let mut entries = Vec::new();

        for (index, result) in reader.deserialize::<EntryRecord>().enumerate() {
            // Row numbers as seen in the file, after the header
            let row = index + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(self.persistence_error("read", e)),
                Err(e) => {
                    tracing::warn!(row, error = %e, "skipping malformed journal row");
                    continue;
                }
            };

            match record.into_entry() {
                Ok(entry) => entries.push(entry),
                Err(reason) => tracing::warn!(row, %reason, "skipping journal row"),
            }
        }

        tracing::info!(count = entries.len(), path = %self.path.display(), "loaded entries");
        Ok(entries)
    }

    fn append(&mut self, entry: &Entry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.persistence_error("create", e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.persistence_error("open", e))?;
        let is_new = file
            .metadata()
            .map_err(|e| self.persistence_error("inspect", e))?
            .len()
            == 0;
        if !is_new {
            terminate_last_line(&mut file).map_err(|e| self.persistence_error("write", e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer
            .serialize(EntryRecord::from(entry))
            .map_err(|e| self.persistence_error("write", e))?;
        writer.flush().map_err(|e| self.persistence_error("flush", e))?;

        tracing::debug!(date = %entry.date, path = %self.path.display(), "appended entry");
        Ok(())
    }
}
