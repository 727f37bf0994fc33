//! Merged absence interval inspection command.
//!
//! Shows what the merger makes of one employee's HR records, which is the
//! input the duty-window reconciler would see. Useful for checking why a
//! day was classified the way it was.

use crate::libs::config::Config;
use crate::libs::employee;
use crate::libs::messages::Message;
use crate::libs::roster::AbsenceRegister;
use crate::libs::view::View;
use crate::libs::workbook;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the absences command.
#[derive(Debug, Args)]
pub struct AbsencesArgs {
    /// HR absence register (.xlsx)
    hr_file: PathBuf,

    /// Employee name as it appears in the register
    #[arg(short, long)]
    employee: String,
}

/// Executes the absences command.
pub fn cmd(args: AbsencesArgs) -> Result<()> {
    let config = Config::read()?;
    let hr_rows = workbook::read_hr_rows(&args.hr_file, &config.hr_layout())?;

    let name = employee::normalize_hr_name(&args.employee);
    let raw_count = hr_rows.iter().filter(|row| employee::normalize_hr_name(&row.name) == name).count();

    let register = AbsenceRegister::from_rows(hr_rows);
    let intervals = register.for_employee(&name);
    if intervals.is_empty() {
        msg_warning!(Message::NoAbsencesFound(name));
        return Ok(());
    }

    msg_print!(Message::AbsencesTitle(name.clone()), true);
    View::absences(intervals)?;
    msg_info!(Message::AbsencesMerged(raw_count, intervals.len()));

    Ok(())
}
