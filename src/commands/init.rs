//! Application configuration initialization command.
//!
//! Runs the interactive wizard from `libs::config`, letting the user adjust
//! the OA/HR sheet layouts and the default report file name.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// With `--delete`, removes the stored configuration file so the defaults
/// apply again; otherwise runs the interactive wizard and saves the result.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
