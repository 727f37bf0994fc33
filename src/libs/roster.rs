//! Row models and the per-run reconciliation pipeline.
//!
//! `build_report` is the pure heart of the program: it consumes typed OA
//! rows plus the absence register and accumulates the per-employee,
//! per-day status table, leaving spreadsheet reading and writing to the
//! boundary modules.

use super::duty;
use super::employee;
use super::interval::{MergeIntervals, TimeInterval};
use super::shift::{Shift, ShiftParseError, NO_SHIFT_LABEL};
use super::status::{classify, DayStatus, PunchRecord};
use crate::libs::messages::Message;
use crate::{msg_info, msg_warning};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

/// One attendance row from the OA export, already mapped to typed fields.
#[derive(Debug, Clone)]
pub struct OaRow {
    pub name: String,
    pub department: String,
    pub gender: String,
    pub date: NaiveDate,
    pub shift_label: String,
    pub checkin: Option<NaiveTime>,
    pub checkout: Option<NaiveTime>,
}

/// One leave row from the HR register, name still raw.
#[derive(Debug, Clone)]
pub struct AbsenceRow {
    pub name: String,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

/// Merged absence intervals grouped by normalized employee name.
#[derive(Debug, Default)]
pub struct AbsenceRegister {
    by_employee: HashMap<String, Vec<TimeInterval>>,
}

impl AbsenceRegister {
    /// Groups raw HR rows by employee and merges each group.
    ///
    /// Rows with inverted bounds are dropped, consistent with the policy
    /// that malformed time fields become absent values rather than errors.
    pub fn from_rows(rows: Vec<AbsenceRow>) -> Self {
        let mut grouped: HashMap<String, Vec<TimeInterval>> = HashMap::new();
        for row in rows {
            if let Some(interval) = TimeInterval::new(row.from, row.to) {
                grouped.entry(employee::normalize_hr_name(&row.name)).or_default().push(interval);
            }
        }

        let by_employee = grouped.into_iter().map(|(name, intervals)| (name, intervals.merge())).collect();
        AbsenceRegister { by_employee }
    }

    /// Merged intervals for one employee; empty when none are on record.
    pub fn for_employee(&self, name: &str) -> &[TimeInterval] {
        self.by_employee.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// One output row: an employee with a status cell per reported date.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub name: String,
    pub department: String,
    pub gender: String,
    pub cells: HashMap<NaiveDate, String>,
}

/// The accumulated report: employees in first-seen order, one column per
/// distinct OA date in first-seen order. At most one cell per
/// (employee, date); a later OA row for the same pair overwrites.
#[derive(Debug, Default)]
pub struct ReportTable {
    pub dates: Vec<NaiveDate>,
    pub employees: Vec<EmployeeRecord>,
    pub flagged: usize,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn cell(&self, name: &str, date: NaiveDate) -> Option<&str> {
        self.employees
            .iter()
            .find(|record| record.name == name)
            .and_then(|record| record.cells.get(&date))
            .map(String::as_str)
    }

    fn record(&mut self, name: &str, row: &OaRow, description: String) {
        let index = match self.employees.iter().position(|record| record.name == name) {
            Some(index) => index,
            None => {
                msg_info!(Message::ProcessingEmployee(name.to_string()));
                self.employees.push(EmployeeRecord {
                    name: name.to_string(),
                    department: row.department.clone(),
                    gender: row.gender.clone(),
                    cells: HashMap::new(),
                });
                self.employees.len() - 1
            }
        };
        self.employees[index].cells.insert(row.date, description);
    }
}

/// Reconciles a single OA row against the employee's merged absences.
///
/// Returns `Ok(None)` for the no-shift sentinel. A malformed shift label
/// is surfaced to the caller, which skips the row with a warning.
pub fn reconcile_day(row: &OaRow, absences: &[TimeInterval]) -> Result<Option<DayStatus>, ShiftParseError> {
    if row.shift_label.trim() == NO_SHIFT_LABEL {
        return Ok(None);
    }
    let shift: Shift = row.shift_label.parse()?;

    let window = duty::reconcile(shift.on_duty(row.date), shift.off_duty(row.date), absences);
    let punches = PunchRecord {
        checkin: row.checkin,
        checkout: row.checkout,
    };
    Ok(Some(classify(&window, &punches)))
}

/// Runs the full reconciliation over the OA rows.
///
/// Date columns are collected from every OA row, sentinel days included,
/// so the report keeps a column even for days nobody had a shift.
pub fn build_report(oa_rows: &[OaRow], register: &AbsenceRegister) -> ReportTable {
    let mut table = ReportTable::default();

    for row in oa_rows {
        if !table.dates.contains(&row.date) {
            table.dates.push(row.date);
        }

        let name = employee::normalize_oa_name(&row.name);
        let status = match reconcile_day(row, register.for_employee(&name)) {
            Ok(Some(status)) => status,
            Ok(None) => continue,
            Err(_) => {
                msg_warning!(Message::ShiftLabelUnparsed(name.clone(), row.shift_label.clone()));
                continue;
            }
        };

        if status.is_flagged() {
            table.flagged += 1;
        }
        table.record(&name, row, status.to_string());
    }

    table
}
