//! The main reconciliation command.
//!
//! Reads the OA attendance export and the HR absence register, runs the
//! merge → duty-window → classification pipeline per employee-day, and
//! writes the styled report workbook. Per-row problems (unparseable
//! punches, malformed shift labels) never abort the run; they degrade to
//! missing-punch classifications or skipped rows. The output file is only
//! written once the whole table is built, so a failed run leaves no
//! partial report behind.

use crate::libs::config::Config;
use crate::libs::export::{ReportFormat, ReportWriter};
use crate::libs::messages::Message;
use crate::libs::roster::{self, AbsenceRegister};
use crate::libs::view::View;
use crate::libs::workbook;
use crate::{msg_bail_anyhow, msg_debug, msg_info, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the reconcile command.
#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// OA attendance export (.xlsx)
    oa_file: PathBuf,

    /// HR absence register (.xlsx)
    hr_file: PathBuf,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: ReportFormat,

    /// Custom output file path; defaults to the configured report name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a per-employee overview table after writing
    #[arg(long)]
    summary: bool,
}

/// Executes the reconciliation run.
pub fn cmd(args: ReconcileArgs) -> Result<()> {
    let config = Config::read()?;

    msg_info!(Message::ReconcileStarting(
        args.oa_file.display().to_string(),
        args.hr_file.display().to_string()
    ));

    let oa_rows = workbook::read_oa_rows(&args.oa_file, &config.oa_layout())?;
    if oa_rows.is_empty() {
        msg_bail_anyhow!(Message::OaSheetEmpty(args.oa_file.display().to_string()));
    }
    msg_debug!(Message::OaRowsLoaded(oa_rows.len(), args.oa_file.display().to_string()));

    let hr_rows = workbook::read_hr_rows(&args.hr_file, &config.hr_layout())?;
    msg_debug!(Message::HrRowsLoaded(hr_rows.len(), args.hr_file.display().to_string()));

    let register = AbsenceRegister::from_rows(hr_rows);
    let report = roster::build_report(&oa_rows, &register);
    if report.is_empty() {
        msg_warning!(Message::ReportEmpty);
        return Ok(());
    }

    let writer = ReportWriter::new(args.format, args.output, &config.output_file());
    writer.write(&report)?;

    msg_info!(Message::ReportSummary {
        employees: report.employees.len(),
        days: report.dates.len(),
        flagged: report.flagged,
    });
    if args.summary {
        View::report_overview(&report)?;
    }

    Ok(())
}
