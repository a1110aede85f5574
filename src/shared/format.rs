//! Display formatting for report dates and times.
//!
//! The server sends dates as `YYYY-MM-DD...` and times as full timestamps
//! (`YYYY-MM-DDTHH:MM:SS...`). Fields are cut by position, so malformed input
//! produces short or empty segments rather than an error.

use chrono::{Local, NaiveDate};

/// Separator used when printing the report date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `MM/DD/YYYY`, used by the report listing
    Slashed,
    /// `MM-DD-YYYY`, used by the approval queue
    Dashed,
}

impl DateStyle {
    fn separator(self) -> char {
        match self {
            DateStyle::Slashed => '/',
            DateStyle::Dashed => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTimes {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Characters `start..end` of `s`, clamped to its length.
fn segment(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

fn clock(timestamp: &str) -> String {
    format!("{}{}", segment(timestamp, 11, 13), segment(timestamp, 14, 16))
}

/// Reorder a `YYYY-MM-DD` date into month, day, year.
pub fn date(date: &str, style: DateStyle) -> String {
    let sep = style.separator();
    format!(
        "{}{sep}{}{sep}{}",
        segment(date, 5, 7),
        segment(date, 8, 10),
        segment(date, 0, 4)
    )
}

pub fn time_and_date(start_time: &str, end_time: &str, date: &str, style: DateStyle) -> FormattedTimes {
    FormattedTimes {
        date: self::date(date, style),
        start_time: clock(start_time),
        end_time: clock(end_time),
    }
}

/// Format a creation timestamp as `MM/DD/YYYY @ HHMM`.
pub fn created(created: &str) -> String {
    format!(
        "{}/{}/{} @ {}",
        segment(created, 5, 7),
        segment(created, 8, 10),
        segment(created, 0, 4),
        clock(created)
    )
}

/// Strip a single leading `+` from a point value.
pub fn normalize_points(points: &str) -> &str {
    points.strip_prefix('+').unwrap_or(points)
}

/// Today's date in the form the submission date field expects.
pub fn today() -> String {
    format_form_date(Local::now().date_naive())
}

pub fn format_form_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
