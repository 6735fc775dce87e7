//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour application
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Not a moodjour directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Empty entry: write something before saving")]
    EmptyEntry,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::NotJournalDirectory(_) => 2,
            MoodjourError::EmptyEntry => 3,
            MoodjourError::Persistence(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjourError::EmptyEntry => {
                "Empty entry: please write something before saving!\n\n\
                Examples:\n\
                moodjour add \"Had a lovely walk in the park\"\n\
                echo \"Long day at work\" | moodjour add --date 2025-01-17"
                    .to_string()
            }
            MoodjourError::Persistence(msg) => {
                format!(
                    "Persistence error: {}\n\n\
                    Suggestions:\n\
                    • Check that the journal file is writable\n\
                    • Check the configured file: moodjour config journal_file",
                    msg
                )
            }
            MoodjourError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: moodjour config emoji false",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_journal_directory_suggestion() {
        let err = MoodjourError::NotJournalDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("moodjour init"));
        assert!(msg.contains("MOODJOUR_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_empty_entry_examples() {
        let msg = MoodjourError::EmptyEntry.display_with_suggestions();
        assert!(msg.contains("write something"));
        assert!(msg.contains("moodjour add"));
    }

    #[test]
    fn test_persistence_suggestions() {
        let err = MoodjourError::Persistence("disk full".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("disk full"));
        assert!(msg.contains("journal_file"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            MoodjourError::NotJournalDirectory(PathBuf::from("/x")).exit_code(),
            2
        );
        assert_eq!(MoodjourError::EmptyEntry.exit_code(), 3);
        assert_eq!(MoodjourError::Persistence("x".into()).exit_code(), 4);
        assert_eq!(MoodjourError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = MoodjourError::Config("Unknown config key: 'xyz'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("moodjour config emoji false"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = MoodjourError::Config("bad value".to_string());
        assert_eq!(err.display_with_suggestions(), "bad value");
    }
}
