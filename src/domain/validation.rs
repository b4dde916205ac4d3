//! Input format checks
//!
//! These are available to callers but are not applied to note titles or
//! content.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap())
}

/// Check that a string is a calendar date in `dd-mm-yyyy` form
pub fn validate_date(date_str: &str) -> bool {
    NaiveDate::parse_from_str(date_str, "%d-%m-%Y").is_ok()
}

/// Check that a string looks like an email address
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}
