//! Configuration management for spreadsheet layouts and report output.
//!
//! Real-world OA and HR exports differ in where their header block ends
//! and which columns carry each field, so both layouts are configurable
//! and persisted as JSON in the platform application data directory.
//! A missing configuration file is not an error: `Config::read()` falls
//! back to defaults matching the exports this tool was built around, and
//! `rekap init` runs an interactive wizard to adjust them.
//!
//! All column indices are 0-based positions in the worksheet row;
//! `header_rows` counts every row above the first data row, title and
//! header lines included.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default name of the generated report workbook.
pub const DEFAULT_OUTPUT_FILE: &str = "attendance_report.xlsx";

/// Column layout of the OA attendance export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OaLayout {
    /// Rows above the first data row (title block plus header line).
    pub header_rows: usize,
    pub name: usize,
    pub department: usize,
    pub gender: usize,
    pub date: usize,
    pub shift: usize,
    pub checkin: usize,
    pub checkout: usize,
}

impl Default for OaLayout {
    fn default() -> Self {
        OaLayout {
            header_rows: 6,
            name: 0,
            department: 1,
            gender: 2,
            date: 3,
            shift: 4,
            checkin: 5,
            checkout: 6,
        }
    }
}

/// Column layout of the HR absence register.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HrLayout {
    /// Rows above the first data row.
    pub header_rows: usize,
    pub name: usize,
    pub from: usize,
    pub to: usize,
}

impl Default for HrLayout {
    fn default() -> Self {
        HrLayout {
            header_rows: 1,
            name: 3,
            from: 4,
            to: 5,
        }
    }
}

/// Root configuration object. Unset sections fall back to defaults at the
/// point of use and are omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oa: Option<OaLayout>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr: Option<HrLayout>,

    /// Default report file name, used when `--output` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet. A present-but-unparseable file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective OA layout, configured or default.
    pub fn oa_layout(&self) -> OaLayout {
        self.oa.clone().unwrap_or_default()
    }

    /// Effective HR layout, configured or default.
    pub fn hr_layout(&self) -> HrLayout {
        self.hr.clone().unwrap_or_default()
    }

    /// Effective default output file name.
    pub fn output_file(&self) -> String {
        self.output_file.clone().unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Presents the configurable sections as a multi-select, then prompts
    /// for each chosen section's values with the current (or default)
    /// values pre-filled. The returned config still has to be saved.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let sections = [Message::ConfigModuleOaLayout, Message::ConfigModuleHrLayout, Message::ConfigModuleOutput];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&sections.iter().map(|section| section.to_string()).collect::<Vec<_>>())
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    let default = config.oa.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleOaLayout);
                    config.oa = Some(OaLayout {
                        header_rows: prompt_usize(Message::PromptOaHeaderRows, default.header_rows)?,
                        name: prompt_usize(Message::PromptOaNameColumn, default.name)?,
                        department: prompt_usize(Message::PromptOaDepartmentColumn, default.department)?,
                        gender: prompt_usize(Message::PromptOaGenderColumn, default.gender)?,
                        date: prompt_usize(Message::PromptOaDateColumn, default.date)?,
                        shift: prompt_usize(Message::PromptOaShiftColumn, default.shift)?,
                        checkin: prompt_usize(Message::PromptOaCheckinColumn, default.checkin)?,
                        checkout: prompt_usize(Message::PromptOaCheckoutColumn, default.checkout)?,
                    });
                }
                1 => {
                    let default = config.hr.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleHrLayout);
                    config.hr = Some(HrLayout {
                        header_rows: prompt_usize(Message::PromptHrHeaderRows, default.header_rows)?,
                        name: prompt_usize(Message::PromptHrNameColumn, default.name)?,
                        from: prompt_usize(Message::PromptHrFromColumn, default.from)?,
                        to: prompt_usize(Message::PromptHrToColumn, default.to)?,
                    });
                }
                2 => {
                    let default = config.output_file();
                    msg_print!(Message::ConfigModuleOutput);
                    config.output_file = Some(
                        Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOutputFile.to_string())
                            .default(default)
                            .interact_text()?,
                    );
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn prompt_usize(prompt: Message, default: usize) -> Result<usize> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default)
        .interact_text()?)
}
