//! Spreadsheet reading for the OA and HR exports.
//!
//! Thin calamine wrappers that map the first worksheet of each workbook
//! into typed rows using the column layout from the configuration. Cells
//! arrive either as native spreadsheet datetimes or as strings, so every
//! time-valued cell goes through the lenient parsers; rows missing a name
//! or a date are dropped, and missing punch cells simply stay `None`.

use super::config::{HrLayout, OaLayout};
use super::roster::{AbsenceRow, OaRow};
use super::shift;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

/// Reads the OA attendance export into typed rows.
pub fn read_oa_rows(path: &Path, layout: &OaLayout) -> Result<Vec<OaRow>> {
    let range = first_sheet(path)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(layout.header_rows) {
        let name = cell_string(row, layout.name);
        let Some(date) = cell(row, layout.date).and_then(cell_date) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        rows.push(OaRow {
            name,
            department: cell_string(row, layout.department),
            gender: cell_string(row, layout.gender),
            date,
            shift_label: cell_string(row, layout.shift),
            checkin: cell(row, layout.checkin).and_then(cell_time),
            checkout: cell(row, layout.checkout).and_then(cell_time),
        });
    }
    Ok(rows)
}

/// Reads the HR absence register into typed rows.
///
/// Rows whose interval bounds fail to parse are dropped here; inverted
/// intervals are left for the register builder to reject.
pub fn read_hr_rows(path: &Path, layout: &HrLayout) -> Result<Vec<AbsenceRow>> {
    let range = first_sheet(path)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(layout.header_rows) {
        let name = cell_string(row, layout.name);
        if name.is_empty() {
            continue;
        }

        let from = cell(row, layout.from).and_then(cell_datetime);
        let to = cell(row, layout.to).and_then(cell_datetime);
        if let (Some(from), Some(to)) = (from, to) {
            rows.push(AbsenceRow { name, from, to });
        }
    }
    Ok(rows)
}

fn first_sheet(path: &Path) -> Result<Range<Data>> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(msg_error_anyhow!(Message::FileNotFound(display)));
    }

    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook::<Xlsx<std::io::BufReader<std::fs::File>>, _>(path).map_err(|error| msg_error_anyhow!(Message::WorkbookOpenFailed(display.clone(), error.to_string())))?;
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| msg_error_anyhow!(Message::WorkbookSheetMissing(display.clone())))?
        .map_err(|error| msg_error_anyhow!(Message::WorkbookOpenFailed(display, error.to_string())))
}

fn cell(row: &[Data], index: usize) -> Option<&Data> {
    row.get(index)
}

fn cell_string(row: &[Data], index: usize) -> String {
    cell(row, index).and_then(|data| data.as_string()).unwrap_or_default().trim().to_string()
}

fn cell_datetime(data: &Data) -> Option<NaiveDateTime> {
    match data {
        Data::String(value) => shift::parse_datetime_lenient(value),
        _ => data.as_datetime(),
    }
}

fn cell_time(data: &Data) -> Option<NaiveTime> {
    match data {
        Data::String(value) => shift::parse_time_lenient(value),
        _ => data.as_time(),
    }
}

fn cell_date(data: &Data) -> Option<NaiveDate> {
    match data {
        Data::String(value) => shift::parse_date_lenient(value),
        _ => data.as_datetime().map(|datetime| datetime.date()),
    }
}
