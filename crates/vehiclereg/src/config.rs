//! Configuration management for vehiclereg.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::validation::{Policy, Validator};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "vehiclereg";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "VEHICLEREG_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `VEHICLEREG_`, sections separated
///    by `__`, e.g. `VEHICLEREG_POLICY__MAX_MILEAGE`)
/// 2. TOML config file at `~/.config/vehiclereg/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Field validation policy.
    pub policy: Policy,
    /// Interactive session behaviour.
    pub session: SessionConfig,
}

/// Interactive session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ask for a yes/no confirmation before saving a new vehicle.
    pub confirm_before_save: bool,
    /// Print the welcome banner when the session starts.
    pub show_banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confirm_before_save: true,
            show_banner: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = Self::resolve_path(config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check a single configuration file on its own.
    ///
    /// Unlike [`Config::load_from`], the file must exist and environment
    /// overrides are not applied, so the result describes the file alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigMissing`] if there is no file at `path`, or an
    /// error if parsing or validation fails.
    pub fn check_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigMissing {
                path: path.to_path_buf(),
            });
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()?;
        config.validate()?;
        debug!(path = %path.display(), "Configuration file is valid");
        Ok(config)
    }

    /// The file to read: `config_path` if given, else the default location.
    #[must_use]
    pub fn resolve_path(config_path: Option<PathBuf>) -> PathBuf {
        config_path.unwrap_or_else(Self::default_config_path)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.policy.min_year > self.policy.max_year {
            return Err(Error::ConfigValidation {
                message: format!(
                    "min_year ({}) cannot be greater than max_year ({})",
                    self.policy.min_year, self.policy.max_year
                ),
            });
        }

        Ok(())
    }

    /// Build the validator for the configured policy.
    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::new(self.policy)
    }
}
