//! Configuration management for contactvault.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::error::{Error, Result};
use crate::render::DEFAULT_MESSAGE_PREVIEW_LEN;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "contactvault";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "contacts.db";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONTACTVAULT_`, section and
///    key separated by a double underscore, e.g.
///    `CONTACTVAULT_API__FAILURE_PROBABILITY`)
/// 2. TOML config file at `~/.config/contactvault/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Simulated backend configuration.
    pub api: BackendConfig,
    /// Rendering configuration.
    pub view: ViewConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/contactvault/contacts.db`
    pub database_path: Option<PathBuf>,
}

/// Simulated-backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Simulated latency for record creation, in milliseconds.
    pub create_delay_ms: u64,
    /// Simulated latency for delete and status updates, in milliseconds.
    pub mutate_delay_ms: u64,
    /// Probability that a create fails with a synthetic transient error.
    /// Must be within `[0, 1]`; 0 disables the failure path.
    pub failure_probability: f64,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Number of message characters shown before truncation.
    pub message_preview_len: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            create_delay_ms: 1500,
            mutate_delay_ms: 300,
            failure_probability: 0.10,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            message_preview_len: DEFAULT_MESSAGE_PREVIEW_LEN,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `CONTACTVAULT_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("CONTACTVAULT_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.api.failure_probability) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "failure_probability ({}) must be within [0, 1]",
                    self.api.failure_probability
                ),
            });
        }

        if self.view.message_preview_len == 0 {
            return Err(Error::ConfigValidation {
                message: "message_preview_len must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Translate the backend section into the API's tuning struct.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            create_delay: Duration::from_millis(self.api.create_delay_ms),
            mutate_delay: Duration::from_millis(self.api.mutate_delay_ms),
            failure_probability: self.api.failure_probability,
        }
    }
}
