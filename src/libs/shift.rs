//! Shift label parsing and lenient time field handling.
//!
//! The OA export carries the scheduled shift as a `"09:00-18:00"` style
//! label, with `"(-)"` standing in for days without a scheduled shift.
//! Punch and absence cells arrive as native spreadsheet datetimes or as
//! strings in a handful of layouts; the `parse_*_lenient` helpers accept
//! what they can and return `None` for the rest, which downstream
//! classification turns into missing-punch outcomes rather than errors.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Sentinel the OA export uses for days with no scheduled shift.
pub const NO_SHIFT_LABEL: &str = "(-)";

/// Scheduled duty boundaries parsed from a shift label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftParseError {
    #[error("shift label '{0}' is not in HH:MM-HH:MM form")]
    Malformed(String),
    #[error("shift label '{0}' has an unparseable time component")]
    BadTime(String),
}

impl Shift {
    /// Nominal duty start on the given date.
    pub fn on_duty(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    /// Nominal duty end on the given date.
    pub fn off_duty(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }
}

impl FromStr for Shift {
    type Err = ShiftParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        static SHIFT_RE: OnceLock<Regex> = OnceLock::new();
        let re = SHIFT_RE.get_or_init(|| Regex::new(r"^([0-9:]+)-([0-9:]+)$").unwrap());

        let captures = re.captures(label.trim()).ok_or_else(|| ShiftParseError::Malformed(label.to_string()))?;
        let start = parse_time_lenient(&captures[1]);
        let end = parse_time_lenient(&captures[2]);
        match (start, end) {
            (Some(start), Some(end)) => Ok(Shift { start, end }),
            _ => Err(ShiftParseError::BadTime(label.to_string())),
        }
    }
}

/// Parses a time-of-day string, trying "HH:MM:SS" then "HH:MM".
pub fn parse_time_lenient(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Parses a timestamp string in ISO or space-separated layouts.
pub fn parse_datetime_lenient(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Parses a calendar date, accepting a bare date or a full timestamp.
pub fn parse_date_lenient(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime_lenient(value).map(|dt| dt.date()))
}
