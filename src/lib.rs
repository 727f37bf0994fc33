//! # Rekap - Reconciliation of Employee Clock And Punch data
//!
//! A command-line utility that reconciles an office-automation (OA)
//! attendance export with a human-resources (HR) leave register into a
//! single per-employee, per-day status report.
//!
//! ## Features
//!
//! - **Absence Merging**: Collapses overlapping and back-to-back HR leave
//!   records into clean intervals
//! - **Duty-Window Reconciliation**: Adjusts each day's scheduled shift by
//!   the employee's approved absences
//! - **Status Classification**: Grades actual punches against the
//!   effective window (late, early leave, missing punch, absent)
//! - **Styled Reports**: Writes a color-coded Excel workbook, or CSV
//! - **Configurable Layouts**: Sheet offsets and column positions for both
//!   exports are configurable via an interactive wizard
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rekap::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
