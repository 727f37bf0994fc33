//! Console table rendering.

use super::interval::TimeInterval;
use super::roster::ReportTable;
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints merged absence intervals with their durations.
    pub fn absences(intervals: &[TimeInterval]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "FROM", "TO", "DURATION"]);
        for (index, interval) in intervals.iter().enumerate() {
            table.add_row(row![
                index + 1,
                interval.from.format("%Y-%m-%d %H:%M"),
                interval.to.format("%Y-%m-%d %H:%M"),
                format_duration(&interval.duration())
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints a per-employee overview of the reconciled report.
    pub fn report_overview(report: &ReportTable) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "DEPARTMENT", "DAYS", "FLAGGED"]);
        for record in &report.employees {
            let flagged = record.cells.values().filter(|description| description.as_str() != "ok").count();
            table.add_row(row![record.name, record.department, record.cells.len(), flagged]);
        }
        table.printstd();

        Ok(())
    }
}

/// Formats a duration as "HH:MM", clamping negatives to zero.
fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
