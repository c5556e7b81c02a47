//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/plotview/config.json`
//! - macOS: `~/Library/Application Support/plotview/config.json`
//! - Windows: `%APPDATA%/plotview/config.json`
//!
//! Values from the command line (or their environment variables) override
//! the file, which overrides the defaults.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::{AppConfig, ConfigOverrides};
//!
//! let config = AppConfig::load().with_overrides(ConfigOverrides {
//!     supabase_url: Some("https://abc.supabase.co".into()),
//!     ..Default::default()
//! });
//! config.validate()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::constants::DEFAULT_TABLE;
use crate::domain::PlotError;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration and data directories.
pub const APP_NAME: &str = "plotview";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Log file name inside the data directory.
const LOG_FILE: &str = "plotview.log";

// ============================================================================
// AppConfig
// ============================================================================

/// Persistent configuration for the row-store connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Supabase project URL.
    #[serde(default)]
    pub supabase_url: String,
    /// Anonymous API key.
    #[serde(default)]
    pub anon_key: String,
    /// Table holding plot rows.
    #[serde(default = "default_table")]
    pub table: String,
    /// HTTP request timeout; `0` disables it.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            anon_key: String::new(),
            table: default_table(),
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    pub table: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Default log file path under the user's data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn default_log_path() -> Result<PathBuf> {
        let mut path = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine a data directory"))?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(LOG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults.
    ///
    /// Call after logging is set up so a broken file shows in the log.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                tracing::warn!(error = %err, "No config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Loads the configuration at `path`. A missing file means defaults; an
    /// unreadable or malformed one is logged and also means defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Config load failed, using defaults");
                Self::default()
            }
        }
    }

    fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line and environment overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.supabase_url {
            self.supabase_url = url;
        }
        if let Some(key) = overrides.anon_key {
            self.anon_key = key;
        }
        if let Some(table) = overrides.table {
            self.table = table;
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        self
    }

    /// Check that the connection settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `PlotError::Config` naming the first missing setting.
    pub fn validate(&self) -> std::result::Result<(), PlotError> {
        if self.supabase_url.trim().is_empty() {
            return Err(PlotError::config(
                "Supabase URL is not set. Pass --url, set SUPABASE_URL, or add supabase_url to the config file",
            ));
        }
        if self.anon_key.trim().is_empty() {
            return Err(PlotError::config(
                "Anon key is not set. Pass --anon-key, set SUPABASE_ANON_KEY, or add anon_key to the config file",
            ));
        }
        if self.table.trim().is_empty() {
            return Err(PlotError::config("Table name must not be empty"));
        }
        Ok(())
    }

    /// Anon key with everything but the last four characters masked.
    #[must_use]
    pub fn masked_key(&self) -> String {
        let count = self.anon_key.chars().count();
        if count <= 4 {
            return "*".repeat(count);
        }
        let visible: String = self.anon_key.chars().skip(count - 4).collect();
        format!("{}{visible}", "*".repeat(count - 4))
    }
}

// ============================================================================
// Tests
// ============================================================================
