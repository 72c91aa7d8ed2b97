use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::{BudgetError, Result},
};

/// Longest default report window accepted from the config file.
pub const MAX_WINDOW_MONTHS: u32 = 1200;

/// Application settings injected into reports and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Calendar months covered by a report when no start date is given.
    #[serde(default = "default_window_months")]
    pub default_window_months: u32,
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

fn default_window_months() -> u32 {
    1
}

fn default_color_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_window_months: default_window_months(),
            color_output: default_color_output(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.default_window_months == 0 || self.default_window_months > MAX_WINDOW_MONTHS {
            return Err(BudgetError::ConfigError(format!(
                "default_window_months must be between 1 and {MAX_WINDOW_MONTHS}"
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(BudgetError::ConfigError("currency must not be empty".into()));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the stored configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| BudgetError::ConfigError(format!("{}: {err}", self.path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
