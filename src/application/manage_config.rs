//! Config management use case

use crate::error::{NotekeepError, Result};
use crate::infrastructure::config::validate_log_level;
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and updating notekeep.toml in a directory
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service for `dir`
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.dir)?;

        match key {
            "notes_file" => Ok(config.notes_file.display().to_string()),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value and write the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.dir)?;

        match key {
            "notes_file" => {
                if value.is_empty() {
                    return Err(NotekeepError::Config(
                        "notes_file cannot be empty".to_string(),
                    ));
                }
                config.notes_file = PathBuf::from(value);
            }
            "log_level" => {
                validate_log_level(value)?;
                config.log_level = value.to_lowercase();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.dir)?;
        log::info!("set config {} = {}", key, value);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.dir)
    }
}

fn unknown_key(key: &str) -> NotekeepError {
    NotekeepError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: notes_file, log_level",
        key
    ))
}
