//! Absence interval type and the tolerance-based merge pass.

use chrono::{Duration, NaiveDateTime};

/// Gap below which two consecutive intervals count as one, in milliseconds.
///
/// HR exports routinely split a single leave period into back-to-back rows
/// whose boundaries differ by a rounding artifact; anything under this
/// threshold is treated as continuous. The check is strict, so a gap of
/// exactly the tolerance keeps the intervals apart.
const MERGE_TOLERANCE_MS: i64 = 100;

/// A single approved absence period. Invariant: `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl TimeInterval {
    /// Builds an interval, rejecting inverted bounds.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Option<Self> {
        (from <= to).then_some(TimeInterval { from, to })
    }

    pub fn duration(&self) -> Duration {
        self.to.signed_duration_since(self.from)
    }
}

pub trait MergeIntervals {
    fn merge(self) -> Vec<TimeInterval>;
}

impl MergeIntervals for Vec<TimeInterval> {
    /// Collapses overlapping and near-touching intervals.
    ///
    /// The input is sorted by start time first; callers are not trusted to
    /// pre-sort. A single left-to-right scan then folds each interval into
    /// the last emitted one when the gap between them is under the
    /// tolerance, extending the emitted interval's end to the newcomer's.
    /// Merging an already-merged set yields the same set.
    fn merge(mut self) -> Vec<TimeInterval> {
        self.sort_by_key(|interval| interval.from);
        let mut merged: Vec<TimeInterval> = Vec::with_capacity(self.len());

        for interval in self {
            match merged.last_mut() {
                Some(last) if interval.from.signed_duration_since(last.to) < Duration::milliseconds(MERGE_TOLERANCE_MS) => {
                    last.to = interval.to;
                }
                _ => merged.push(interval),
            }
        }
        merged
    }
}
