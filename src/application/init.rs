//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::path::Path;

/// Turn `path` (created if missing) into an empty journal with default config
pub fn init(path: &Path) -> Result<()> {
    let repo = FileSystemRepository::new(path.to_path_buf());
    let config = Config::default();
    repo.initialize(&config)?;

    tracing::info!(root = %path.display(), "initialized journal");
    println!("Initialized moodjour journal at {}", path.display());
    println!("Entries file: {}", repo.journal_path(&config).display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("journals").join("mine");

        init(&root).unwrap();

        let config = Config::load_from_dir(&root).unwrap();
        assert_eq!(config.journal_file, "journal_entries.csv");
        assert!(!root.join("journal_entries.csv").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
