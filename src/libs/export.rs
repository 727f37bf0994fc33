//! Report writing for the reconciled attendance table.
//!
//! Renders the accumulated `ReportTable` either as a styled Excel workbook
//! or as a plain CSV file. The Excel variant colors each status cell by
//! matching marker substrings in the description, mirroring how readers of
//! the report scan it: violet for no-shows, green for late arrivals,
//! yellow for early leaves, red for missing check-outs.
//!
//! ## File Naming
//!
//! Without an explicit output path the writer uses the configured default
//! report name (see `libs::config`), switching the extension to match the
//! chosen format.

use super::roster::ReportTable;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::{Path, PathBuf};

/// Background color for absent / no-show cells.
const COLOR_ABSENT: Color = Color::RGB(0xEE82EE);

/// Enumeration of supported report output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    /// Excel workbook with status-colored cells.
    Xlsx,
    /// Plain CSV without styling, for downstream processing.
    Csv,
}

/// Writes a `ReportTable` to disk in the configured format.
pub struct ReportWriter {
    format: ReportFormat,
    output_path: PathBuf,
}

impl ReportWriter {
    /// Creates a writer for the given format and destination.
    ///
    /// When `output_path` is `None` the `default_name` from configuration
    /// is used, with its extension forced to match the format.
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, default_name: &str) -> Self {
        let extension = match format {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Csv => "csv",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_name).with_extension(extension));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the report and reports the destination to the user.
    pub fn write(&self, table: &ReportTable) -> Result<()> {
        match self.format {
            ReportFormat::Xlsx => self.write_xlsx(table)?,
            ReportFormat::Csv => self.write_csv(table)?,
        }

        msg_success!(Message::ReportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Writes the styled Excel workbook.
    ///
    /// Layout matches the table: a bold header row with employee,
    /// department and gender lead columns followed by one column per
    /// date; one row per employee with status descriptions as cell
    /// values, background-colored via `cell_color`.
    fn write_xlsx(&self, table: &ReportTable) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(Color::Gray);

        worksheet.write_string_with_format(0, 0, "Employee", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Department", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Gender", &header_format)?;
        for (index, date) in table.dates.iter().enumerate() {
            worksheet.write_string_with_format(0, index as u16 + 3, &date.format("%Y-%m-%d").to_string(), &header_format)?;
        }

        for (row_index, record) in table.employees.iter().enumerate() {
            let row = row_index as u32 + 1;
            worksheet.write_string(row, 0, &record.name)?;
            worksheet.write_string(row, 1, &record.department)?;
            worksheet.write_string(row, 2, &record.gender)?;

            for (index, date) in table.dates.iter().enumerate() {
                let Some(description) = record.cells.get(date) else {
                    continue;
                };
                let col = index as u16 + 3;
                match cell_color(description) {
                    Some(color) => {
                        let format = Format::new().set_background_color(color);
                        worksheet.write_string_with_format(row, col, description, &format)?;
                    }
                    None => {
                        worksheet.write_string(row, col, description)?;
                    }
                }
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    /// Writes the unstyled CSV variant with the same cell layout.
    fn write_csv(&self, table: &ReportTable) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        let mut header = vec!["Employee".to_string(), "Department".to_string(), "Gender".to_string()];
        header.extend(table.dates.iter().map(|date| date.format("%Y-%m-%d").to_string()));
        wtr.write_record(&header)?;

        for record in &table.employees {
            let mut row = vec![record.name.clone(), record.department.clone(), record.gender.clone()];
            row.extend(table.dates.iter().map(|date| record.cells.get(date).cloned().unwrap_or_default()));
            wtr.write_record(&row)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Maps a status description to its background color.
///
/// Markers are checked in severity order; the first match wins. Unmarked
/// descriptions (normal days, blank cells) stay unstyled.
pub fn cell_color(description: &str) -> Option<Color> {
    if description.contains("absent") {
        Some(COLOR_ABSENT)
    } else if description.contains("late") {
        Some(Color::Green)
    } else if description.contains("early") {
        Some(Color::Yellow)
    } else if description.contains("no check-out") {
        Some(Color::Red)
    } else {
        None
    }
}
