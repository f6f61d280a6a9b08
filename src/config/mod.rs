//! Configuration module for peoplepick
//!
//! Settings are read from `<config_dir>/peoplepick/config.toml` and can be
//! overridden with `PEOPLEPICK_*` environment variables, e.g.
//! `PEOPLEPICK_DEBOUNCE_MS=150`. Command-line flags win over both.

use crate::ui::ThemeName;
use crate::widget::WidgetConfig;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "peoplepick";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PickerConfig {
    /// Quiet period in milliseconds before the suggestion list is refiltered
    pub debounce_ms: u64,

    /// Dataset file (`.json` or `.csv`); the built-in list when unset
    pub dataset: Option<PathBuf>,

    /// Log file; defaults to the user's cache directory
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Close the picker as soon as someone is selected
    pub exit_on_select: bool,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Color theme
    pub theme: ThemeName,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            dataset: None,
            log_file: None,
            log_level: "info".to_string(),
            exit_on_select: false,
            quiet: false,
            theme: ThemeName::default(),
        }
    }
}

impl PickerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("PEOPLEPICK").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Where log lines go
    ///
    /// The configured file, else `<cache_dir>/peoplepick/peoplepick.log`.
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("peoplepick.log")))
    }

    /// Widget settings derived from this configuration
    #[must_use]
    pub const fn widget_config(&self) -> WidgetConfig {
        WidgetConfig::from_millis(self.debounce_ms)
    }
}
