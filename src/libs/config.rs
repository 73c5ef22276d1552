//! Configuration management for the taskmaster application.
//!
//! Settings live in `config.json` inside the platform-specific application
//! data directory (see [`DataStorage`]). A missing file is not an error: the
//! application runs on defaults until the user runs `taskmaster init`.
//!
//! ## Settings
//!
//! - **Storage key**: the record name tasks are stored under
//! - **Debounce interval**: how long the collection must stay unchanged
//!   before it is written
//! - **Teardown**: whether a write still pending on exit is flushed or dropped
//! - **Default filter**: the view `list` and `shell` start with
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskmaster::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.debounce_ms = 500;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::sync::{Teardown, DEFAULT_DEBOUNCE};
use super::task::TaskFilter;
use crate::db::tasks::DEFAULT_STORAGE_KEY;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::time::Duration;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
///
/// Every field has a default, so a partially written file (or one from an
/// older version) still loads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Key of the durable record holding the task collection.
    ///
    /// Changing it starts from an empty list; the old record stays in place.
    pub storage_key: String,

    /// Quiet interval in milliseconds before a change is written.
    ///
    /// Every mutation restarts the interval, so a burst of edits is written
    /// once, after the last one.
    pub debounce_ms: u64,

    /// Handling of a write that is still pending when the session ends.
    pub teardown: Teardown,

    /// Filter applied by `list` and `shell` when none is given.
    pub default_filter: TaskFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            teardown: Teardown::default(),
            default_filter: TaskFilter::default(),
        }
    }
}

impl Config {
    /// Reads configuration from the default application data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        // No file means defaults
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(config_file_path.display().to_string()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, if any.
    pub fn delete_from(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let default = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader);

        let storage_key: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptStorageKey.to_string())
            .default(default.storage_key)
            .interact_text()?;

        let debounce_ms: u64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptDebounceMs.to_string())
            .default(default.debounce_ms)
            .interact_text()?;

        let teardown_options = [Teardown::Flush, Teardown::Discard];
        let teardown = Select::with_theme(&theme)
            .with_prompt(Message::PromptTeardown.to_string())
            .items(&teardown_options)
            .default(teardown_options.iter().position(|option| *option == default.teardown).unwrap_or(0))
            .interact()?;

        let filter_options = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];
        let default_filter = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultFilter.to_string())
            .items(&filter_options)
            .default(filter_options.iter().position(|option| *option == default.default_filter).unwrap_or(0))
            .interact()?;

        Ok(Config {
            storage_key,
            debounce_ms,
            teardown: teardown_options[teardown],
            default_filter: filter_options[default_filter],
        })
    }
}
