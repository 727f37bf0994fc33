//! Display implementation for rekap application messages.
//!
//! All user-facing text lives in this one `match`, keeping wording and
//! formatting decisions in a single place. The `Message` variants carry
//! their typed parameters; the interpolation happens here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORKBOOK MESSAGES ===
            Message::WorkbookOpenFailed(path, error) => format!("Failed to open workbook {}: {}", path, error),
            Message::WorkbookSheetMissing(path) => format!("Workbook {} contains no worksheets", path),
            Message::OaSheetEmpty(path) => format!("No attendance rows found in {}", path),
            Message::OaRowsLoaded(count, path) => format!("Loaded {} attendance row(s) from {}", count, path),
            Message::HrRowsLoaded(count, path) => format!("Loaded {} absence row(s) from {}", count, path),

            // === RECONCILIATION MESSAGES ===
            Message::ProcessingEmployee(name) => format!("Processing {}", name),
            Message::ShiftLabelUnparsed(employee, label) => {
                format!("Skipping row for {}: shift label '{}' is not parseable", employee, label)
            }
            Message::ReconcileStarting(oa, hr) => format!("Handling {} (as OA data) and {} (as HR data)...", oa, hr),
            Message::ReportCompleted(path) => format!("Report written successfully: {}", path),
            Message::ReportEmpty => "No reportable rows found; nothing was written".to_string(),
            Message::ReportSummary { employees, days, flagged } => {
                format!("{} employee(s), {} day column(s), {} flagged cell(s)", employees, days, flagged)
            }

            // === ABSENCE MESSAGES ===
            Message::AbsencesTitle(employee) => format!("Absence intervals for {}", employee),
            Message::NoAbsencesFound(employee) => format!("No absence records found for {}", employee),
            Message::AbsencesMerged(raw, merged) => format!("Merged {} raw record(s) into {} interval(s)", raw, merged),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleOaLayout => "OA sheet layout".to_string(),
            Message::ConfigModuleHrLayout => "HR sheet layout".to_string(),
            Message::ConfigModuleOutput => "Report output".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptOaHeaderRows => "OA rows before data (title + header rows)".to_string(),
            Message::PromptOaNameColumn => "OA employee name column (0-based)".to_string(),
            Message::PromptOaDepartmentColumn => "OA department column (0-based)".to_string(),
            Message::PromptOaGenderColumn => "OA gender column (0-based)".to_string(),
            Message::PromptOaDateColumn => "OA date column (0-based)".to_string(),
            Message::PromptOaShiftColumn => "OA shift label column (0-based)".to_string(),
            Message::PromptOaCheckinColumn => "OA check-in time column (0-based)".to_string(),
            Message::PromptOaCheckoutColumn => "OA check-out time column (0-based)".to_string(),
            Message::PromptHrHeaderRows => "HR rows before data".to_string(),
            Message::PromptHrNameColumn => "HR employee name column (0-based)".to_string(),
            Message::PromptHrFromColumn => "HR absence start column (0-based)".to_string(),
            Message::PromptHrToColumn => "HR absence end column (0-based)".to_string(),
            Message::PromptOutputFile => "Default report file name".to_string(),

            // === FILE SYSTEM MESSAGES ===
            Message::FileNotFound(path) => format!("File not found: {}", path),
            Message::DataStoragePathError => "DataStorage get_path error".to_string(),
        };

        write!(f, "{}", text)
    }
}
