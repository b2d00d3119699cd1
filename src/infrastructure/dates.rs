// src/infrastructure/dates.rs
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::application::ports::dates::DateTimeParser;

/// The admin panel's date dialect (`6 Dec 14 @ 15:00` and friends), with a
/// time-optional fallback. Two-digit years always mean 20xx, which differs
/// from chrono's 1969 pivot.
#[derive(Default, Clone)]
pub struct ChronoDateParser;

// Second element: whether the format carries a two-digit year.
const DATETIME_FORMATS: &[(&str, bool)] = &[
    ("%d %b %y @ %H:%M", true),
    ("%d %b %y %H:%M", true),
    ("%d %b %Y @ %H:%M", false),
    ("%d %b %Y %H:%M", false),
];

const DATE_FORMATS: &[(&str, bool)] = &[("%d %b %y", true), ("%d %b %Y", false)];

const OUTPUT_FORMAT: &str = "%d %b %y @ %H:%M";

impl ChronoDateParser {
    pub fn new() -> Self {
        Self
    }
}

fn to_utc(naive: NaiveDateTime, two_digit_year: bool) -> Option<DateTime<Utc>> {
    let naive = if two_digit_year && naive.year() < 2000 {
        naive.with_year(naive.year() + 100)?
    } else {
        naive
    };
    Some(Utc.from_utc_datetime(&naive))
}

impl DateTimeParser for ChronoDateParser {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();

        for (format, two_digit_year) in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return to_utc(naive, *two_digit_year);
            }
        }

        for (format, two_digit_year) in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return to_utc(date.and_hms_opt(0, 0, 0)?, *two_digit_year);
            }
        }

        None
    }

    fn format(&self, date: DateTime<Utc>) -> String {
        date.format(OUTPUT_FORMAT).to_string()
    }
}
