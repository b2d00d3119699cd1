// src/application/ports/dates.rs
use chrono::{DateTime, Utc};

/// Parses and renders the admin panel's date strings.
pub trait DateTimeParser: Send + Sync {
    /// `None` when the text is not a recognizable date.
    fn parse(&self, text: &str) -> Option<DateTime<Utc>>;
    fn format(&self, date: DateTime<Utc>) -> String;
}
