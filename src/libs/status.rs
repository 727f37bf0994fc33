//! Attendance status classification.
//!
//! Compares the actual punches of a day against the effective duty window
//! and renders the outcome as a flag set plus a human-readable description.
//! The description strings double as the markers the report writer keys its
//! cell colors on, so their wording is part of the output contract.

use super::duty::DutyWindow;
use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Actual clock events recorded for the day. `None` means no punch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunchRecord {
    pub checkin: Option<NaiveTime>,
    pub checkout: Option<NaiveTime>,
}

/// Check-in judgement against the effective duty start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinResult {
    OnTime,
    /// Minutes past the duty start, hour/minute arithmetic only.
    Late(i64),
    Missing,
}

/// Check-out judgement against the effective duty end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutResult {
    OnTime,
    /// Minutes short of the duty end, hour/minute arithmetic only.
    Early(i64),
    Missing,
}

/// Combined outcome for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Both punches inside the effective window.
    Normal,
    /// No duty required, or a full no-show (both punches missing).
    Absent,
    /// At least one deviation; both sides are carried for rendering.
    Flagged { checkin: CheckinResult, checkout: CheckoutResult },
}

impl DayStatus {
    pub fn is_flagged(&self) -> bool {
        !matches!(self, DayStatus::Normal)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Normal => write!(f, "ok"),
            DayStatus::Absent => write!(f, "absent"),
            DayStatus::Flagged { checkin, checkout } => {
                match checkin {
                    CheckinResult::OnTime => write!(f, "checked in on time,")?,
                    CheckinResult::Late(minutes) => write!(f, "late {} min,", minutes)?,
                    CheckinResult::Missing => write!(f, "no check-in,")?,
                }
                match checkout {
                    CheckoutResult::OnTime => write!(f, "checked out on time"),
                    CheckoutResult::Early(minutes) => write!(f, "early leave {} min", minutes),
                    CheckoutResult::Missing => write!(f, "no check-out"),
                }
            }
        }
    }
}

/// Signed difference `a - b` in whole minutes, ignoring seconds.
fn minutes_between(a: NaiveTime, b: NaiveTime) -> i64 {
    (a.hour() as i64 - b.hour() as i64) * 60 + (a.minute() as i64 - b.minute() as i64)
}

/// Classifies one day of punches against the effective duty window.
///
/// An off-duty window short-circuits to `Absent` regardless of punches.
/// Otherwise each side is judged independently, then composed: two on-time
/// sides collapse to `Normal`, two missing sides to `Absent` (a day with
/// neither punch is a no-show even though each side alone would only be a
/// missing-punch flag), anything else keeps both sides as flags.
pub fn classify(window: &DutyWindow, punches: &PunchRecord) -> DayStatus {
    let Some((on, off)) = window.times() else {
        return DayStatus::Absent;
    };

    let checkin = match punches.checkin {
        Some(time) if time > on => CheckinResult::Late(minutes_between(time, on)),
        Some(_) => CheckinResult::OnTime,
        None => CheckinResult::Missing,
    };
    let checkout = match punches.checkout {
        Some(time) if time < off => CheckoutResult::Early(minutes_between(off, time)),
        Some(_) => CheckoutResult::OnTime,
        None => CheckoutResult::Missing,
    };

    match (checkin, checkout) {
        (CheckinResult::OnTime, CheckoutResult::OnTime) => DayStatus::Normal,
        (CheckinResult::Missing, CheckoutResult::Missing) => DayStatus::Absent,
        _ => DayStatus::Flagged { checkin, checkout },
    }
}
