//! Config management use case

use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "journal_file" => Ok(config.journal_file.clone()),
            "emoji" => Ok(config.emoji.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodjourError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: journal_file, emoji, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "journal_file" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(MoodjourError::Config(
                        "journal_file cannot be empty".to_string(),
                    ));
                }
                config.journal_file = trimmed.to_string();
            }
            "emoji" => {
                config.emoji = parse_bool(value).ok_or_else(|| {
                    MoodjourError::Config(format!(
                        "Invalid value for emoji: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(MoodjourError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodjourError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: journal_file, emoji",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
