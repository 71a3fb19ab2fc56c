//! `AppConfig` struct, config file location, and TOML loading.

use std::path::{Path, PathBuf};

use actionsheet_core::{BusyPolicy, ControllerOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Dialog controller settings.
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Dialog controller configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ControllerConfig {
    /// What to do with a request that arrives while a sheet is showing.
    #[serde(default)]
    pub busy_policy: BusyPolicy,
    /// Maximum waiting requests when `busy_policy = "queue"`.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

/// Serde default for `queue_capacity`.
const fn default_queue_capacity() -> usize {
    ControllerOptions::DEFAULT_QUEUE_CAPACITY
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            busy_policy: BusyPolicy::default(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl ControllerConfig {
    /// Controller options, with an optional policy override.
    #[must_use]
    pub fn options(&self, policy_override: Option<BusyPolicy>) -> ControllerOptions {
        ControllerOptions {
            busy_policy: policy_override.unwrap_or(self.busy_policy),
            queue_capacity: self.queue_capacity,
        }
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// The config rendered as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config to TOML")
    }
}

/// Config file inside `dir`, or `~/.config/actionsheet/config.toml`.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and `HOME` is not set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    let base = match dir {
        Some(dir) => dir.clone(),
        None => std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("actionsheet"))
            .context("HOME environment variable is not set")?,
    };
    Ok(base.join("config.toml"))
}
