//! Note record

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layout used for every note, in local time.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A single user note.
///
/// Field order matters: it is the key order in `notes.json` and the
/// column order in CSV exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

impl Note {
    /// Create a note stamped with the current local time
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Note {
            id,
            title: title.into(),
            content: content.into(),
            timestamp: current_timestamp(),
        }
    }

    /// Apply an update and refresh the timestamp.
    ///
    /// Absent or empty fields keep their current value.
    pub fn apply(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(content) = update.content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        self.timestamp = current_timestamp();
    }
}

/// Partial change to a note. `None` or an empty string keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        NoteUpdate { title, content }
    }
}

/// Current local time formatted as `dd-mm-yyyy HH:MM:SS`
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a note timestamp, returning None when it is malformed
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}
