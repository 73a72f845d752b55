//! Configuration management for the tracksheet application.
//!
//! Settings live in a JSON file under the platform application data
//! directory and are edited through an interactive wizard (`tracksheet
//! init`). Each integration is an optional module; only the time tracker
//! module exists today. Passwords are never written to the configuration
//! file; credentials are supplied per invocation.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\switchbatteries\tracksheet\config.json`
//! - **macOS**: `~/Library/Application Support/switchbatteries/tracksheet/config.json`
//! - **Linux**: `~/.local/share/switchbatteries/tracksheet/config.json`

use super::data_storage::DataStorage;
use crate::api::tracking_time::TrackerConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display available modules and route
/// the selection to the module's own wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Main configuration container for the entire application.
///
/// Every module is optional; a missing module simply means the user never
/// configured it. Unconfigured modules are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Time tracker service configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: it yields the default configuration
    /// so commands can run with flags and environment variables alone.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing files are not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Presents the available modules, pre-fills existing values as
    /// defaults and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![TrackerConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "tracker" => {
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig::init(&config.tracker)?);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
