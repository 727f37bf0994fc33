#[derive(Debug, Clone)]
pub enum Message {
    // === WORKBOOK MESSAGES ===
    WorkbookOpenFailed(String, String), // path, error
    WorkbookSheetMissing(String),       // path
    OaSheetEmpty(String),               // path
    OaRowsLoaded(usize, String),        // count, path
    HrRowsLoaded(usize, String),        // count, path

    // === RECONCILIATION MESSAGES ===
    ProcessingEmployee(String),         // normalized name
    ShiftLabelUnparsed(String, String), // employee, label
    ReconcileStarting(String, String),  // oa path, hr path
    ReportCompleted(String),            // output path
    ReportEmpty,
    ReportSummary { employees: usize, days: usize, flagged: usize },

    // === ABSENCE MESSAGES ===
    AbsencesTitle(String),   // employee
    NoAbsencesFound(String), // employee
    AbsencesMerged(usize, usize), // raw count, merged count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleOaLayout,
    ConfigModuleHrLayout,
    ConfigModuleOutput,

    // === PROMPTS ===
    PromptSelectModules,
    PromptOaHeaderRows,
    PromptOaNameColumn,
    PromptOaDepartmentColumn,
    PromptOaGenderColumn,
    PromptOaDateColumn,
    PromptOaShiftColumn,
    PromptOaCheckinColumn,
    PromptOaCheckoutColumn,
    PromptHrHeaderRows,
    PromptHrNameColumn,
    PromptHrFromColumn,
    PromptHrToColumn,
    PromptOutputFile,

    // === FILE SYSTEM MESSAGES ===
    FileNotFound(String),
    DataStoragePathError,
}
