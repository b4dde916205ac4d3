//! Error types for notekeep

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notekeep
#[derive(Debug, Error)]
pub enum NotekeepError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    #[error("File not found: {0}")]
    ImportFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotekeepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotekeepError::NoteNotFound(_) => 2,
            NotekeepError::ImportFileNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotekeepError::NoteNotFound(id) => {
                format!(
                    "Note not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'notekeep list' to see existing note ids",
                    id
                )
            }
            NotekeepError::ImportFileNotFound(path) => {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path of the CSV file\n\
                    • Create one with 'notekeep export <PATH>'",
                    path.display()
                )
            }
            NotekeepError::Config(msg) => {
                if msg.contains("Invalid log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: off, error, warn, info, debug, trace\n\
                        Example: notekeep config log_level info",
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

/// Result type using NotekeepError
pub type Result<T> = std::result::Result<T, NotekeepError>;
