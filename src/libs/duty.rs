//! Effective duty window calculation.
//!
//! Takes the nominal shift boundaries and the merged absence intervals for
//! the day and derives the window actual punches are judged against. An
//! absence overlapping the start of the shift pushes the start later; one
//! overlapping the end pulls the end earlier; one covering the whole
//! (already adjusted) shift cancels duty for the day.

use super::interval::TimeInterval;
use chrono::{NaiveDateTime, NaiveTime};
use std::ops::ControlFlow;

/// Duty expectation for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyWindow {
    /// Duty is expected between the two timestamps.
    Scheduled { on: NaiveDateTime, off: NaiveDateTime },
    /// Approved absences cover the entire shift; no duty required.
    OffDuty,
}

impl DutyWindow {
    /// Time-of-day boundaries for punch comparison, or `None` when off duty.
    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self {
            DutyWindow::Scheduled { on, off } => Some((on.time(), off.time())),
            DutyWindow::OffDuty => None,
        }
    }
}

/// Folds merged absence intervals over the nominal shift window.
///
/// Each interval is evaluated against the window as adjusted by the
/// intervals before it. Exactly one of three cases applies:
///
/// - the shift starts before the absence and ends inside it (closed upper
///   bound): the end is truncated to the absence start;
/// - the shift starts inside the absence: if it also ends within it the
///   whole day is off duty and the fold stops early, otherwise the start
///   moves to the absence end;
/// - no overlap: the window passes through unchanged.
///
/// `absences` must already be merged and ordered by start time.
pub fn reconcile(on_duty: NaiveDateTime, off_duty: NaiveDateTime, absences: &[TimeInterval]) -> DutyWindow {
    let adjusted = absences.iter().try_fold((on_duty, off_duty), |(on, off), absence| {
        if on < absence.from {
            if off > absence.from && off <= absence.to {
                // Leaves early for the absence.
                ControlFlow::Continue((on, absence.from))
            } else {
                ControlFlow::Continue((on, off))
            }
        } else if on < absence.to {
            if off <= absence.to {
                // The absence swallows the remaining shift.
                ControlFlow::Break(())
            } else {
                // Starts late because of the absence.
                ControlFlow::Continue((absence.to, off))
            }
        } else {
            ControlFlow::Continue((on, off))
        }
    });

    match adjusted {
        ControlFlow::Continue((on, off)) => DutyWindow::Scheduled { on, off },
        ControlFlow::Break(()) => DutyWindow::OffDuty,
    }
}
