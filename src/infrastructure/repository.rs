//! Journal root discovery and on-disk layout
//!
//! A journal root is any directory holding a `.moodjour/` directory. The
//! config lives inside it; the entry file sits next to it.

use crate::error::{MoodjourError, Result};
use crate::infrastructure::config::JOURNAL_DIR;
use crate::infrastructure::{Config, CsvJournalStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "MOODJOUR_ROOT";

/// Where a journal keeps its configuration
pub trait JournalRepository {
    fn root(&self) -> &Path;

    fn load_config(&self) -> Result<Config>;

    fn save_config(&self, config: &Config) -> Result<()>;

    /// Whether the root already carries a `.moodjour` directory
    fn is_initialized(&self) -> bool;

    /// Create `.moodjour` and write `config` into it.
    /// Refuses to touch a root that is already a journal.
    fn initialize(&self, config: &Config) -> Result<()>;
}

fn is_journal_root(dir: &Path) -> bool {
    dir.join(JOURNAL_DIR).is_dir()
}

/// Journal rooted in a local directory
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// `MOODJOUR_ROOT` when set, otherwise the nearest journal root above the
    /// current directory
    pub fn discover() -> Result<Self> {
        match std::env::var_os(ROOT_ENV) {
            Some(root) => Self::from_env_root(PathBuf::from(root)),
            None => Self::discover_from(&std::env::current_dir()?),
        }
    }

    fn from_env_root(root: PathBuf) -> Result<Self> {
        if is_journal_root(&root) {
            return Ok(FileSystemRepository::new(root));
        }
        Err(MoodjourError::Config(format!(
            "{} points at '{}', which has no {} directory. \
            Run 'moodjour init' there or unset {}.",
            ROOT_ENV,
            root.display(),
            JOURNAL_DIR,
            ROOT_ENV
        )))
    }

    /// Nearest journal root at or above `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let root = start
            .ancestors()
            .find(|dir| is_journal_root(dir))
            .ok_or_else(|| MoodjourError::NotJournalDirectory(start.to_path_buf()))?;

        tracing::debug!(root = %root.display(), "found journal root");
        Ok(FileSystemRepository::new(root.to_path_buf()))
    }

    /// Path of the entry file named in the config
    pub fn journal_path(&self, config: &Config) -> PathBuf {
        self.root.join(&config.journal_file)
    }

    /// Entry store for this journal
    pub fn journal_store(&self, config: &Config) -> CsvJournalStore {
        CsvJournalStore::new(self.journal_path(config))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        is_journal_root(&self.root)
    }

    fn initialize(&self, config: &Config) -> Result<()> {
        if self.root.join(JOURNAL_DIR).exists() {
            return Err(MoodjourError::Config(format!(
                "Journal already initialized at {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&self.root)?;
        fs::create_dir(self.root.join(JOURNAL_DIR))?;
        self.save_config(config)
    }
}
