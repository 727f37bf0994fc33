pub mod absences;
pub mod init;
pub mod reconcile;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Reconcile an OA attendance export against an HR absence register", arg_required_else_help = true)]
    Reconcile(reconcile::ReconcileArgs),
    #[command(about = "Display merged absence intervals for an employee", arg_required_else_help = true)]
    Absences(absences::AbsencesArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Reconcile(args) => reconcile::cmd(args),
            Commands::Absences(args) => absences::cmd(args),
        }
    }
}
