//! Configuration management

use crate::error::{NotekeepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "notekeep.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notes_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes_file: PathBuf::from("notes.json"),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from notekeep.toml in the given directory, or defaults if absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(NotekeepError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            NotekeepError::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
        })?;
        validate_log_level(&config.log_level)?;
        Ok(config)
    }

    /// Save config to notekeep.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| NotekeepError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE_NAME), contents)?;
        Ok(())
    }

    /// Resolve the notes file against `base` when it is relative
    pub fn notes_path(&self, base: &Path) -> PathBuf {
        if self.notes_file.is_absolute() {
            self.notes_file.clone()
        } else {
            base.join(&self.notes_file)
        }
    }
}

/// Reject anything that is not a `log` level name
pub fn validate_log_level(level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(NotekeepError::Config(format!("Invalid log level: {}", level)))
    }
}
