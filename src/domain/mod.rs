//! Domain layer - Note model and input checks

pub mod note;
pub mod validation;

pub use note::{current_timestamp, parse_timestamp, Note, NoteUpdate, TIMESTAMP_FORMAT};
pub use validation::{validate_date, validate_email};
