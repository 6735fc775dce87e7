//! Configuration management

use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory marking a journal root
pub const JOURNAL_DIR: &str = ".moodjour";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_JOURNAL_FILE: &str = "journal_entries.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Entry file, relative to the journal root
    #[serde(default = "default_journal_file")]
    pub journal_file: String,
    /// Decorate emotion labels with their emoji when displaying
    #[serde(default = "default_emoji")]
    pub emoji: bool,
    pub created: DateTime<Utc>,
}

fn default_journal_file() -> String {
    DEFAULT_JOURNAL_FILE.to_string()
}

fn default_emoji() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: default_journal_file(),
            emoji: default_emoji(),
            created: Utc::now(),
        }
    }
}

/// `.moodjour/config.toml` under a journal root
pub fn config_path(root: &Path) -> PathBuf {
    root.join(JOURNAL_DIR).join(CONFIG_FILE)
}

impl Config {
    /// Read the config of the journal rooted at `root`.
    /// A missing file means `root` is not a journal.
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(config_path(root)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(MoodjourError::NotJournalDirectory(root.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&raw)?)
    }

    /// Write the config of the journal rooted at `root`, creating `.moodjour`
    pub fn save_to_dir(&self, root: &Path) -> Result<()> {
        fs::create_dir_all(root.join(JOURNAL_DIR))?;
        fs::write(config_path(root), toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
