//! notekeep - Terminal note keeper
//!
//! Notes live in a JSON file that is rewritten on every change, and can be
//! exported to or imported from CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotekeepError;
