//! Configuration file loading.
//!
//! Configuration lives in a YAML file, by default
//! `<config_dir>/folio/config.yaml`. Every field is optional:
//!
//! ```yaml
//! store:
//!   path: /home/me/.local/share/folio/preferences.json
//!   key: theme
//!   enabled: true
//! watch:
//!   poll_interval_ms: 1000
//! contact:
//!   min_message_len: 10
//!   simulated_latency_ms: 1500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_theme::{DisabledStore, FileStore, MemoryStore, PreferenceStore, DEFAULT_THEME_KEY};
use folio_ui::{ContactValidator, DEFAULT_MIN_MESSAGE_LEN, DEFAULT_SIMULATED_LATENCY};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the preference file location.
pub const STORE_ENV: &str = "FOLIO_STORE";

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "config.yaml";
const STORE_FILE: &str = "preferences.json";

/// Error returned when a configuration file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
    pub key: String,
    pub enabled: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: DEFAULT_THEME_KEY.to_string(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub min_message_len: usize,
    pub simulated_latency_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            min_message_len: DEFAULT_MIN_MESSAGE_LEN,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY.as_millis() as u64,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub store: StoreConfig,
    pub watch: WatchConfig,
    pub contact: ContactConfig,
}

impl FolioConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolves the preference file path.
    ///
    /// Precedence: `cli_override`, then [`STORE_ENV`], then the config file,
    /// then `<data_dir>/folio/preferences.json`.
    pub fn store_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| {
                std::env::var_os(STORE_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.store.path.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR).join(STORE_FILE)))
    }

    /// Opens the preference store described by this configuration.
    ///
    /// Falls back to an in-memory store when no location can be resolved.
    pub fn open_store(&self, cli_override: Option<&Path>) -> Box<dyn PreferenceStore> {
        if !self.store.enabled {
            tracing::debug!("preference store disabled by config");
            return Box::new(DisabledStore);
        }
        match self.store_path(cli_override) {
            Some(path) => {
                tracing::debug!("using preference file {:?}", path);
                Box::new(FileStore::new(path))
            }
            None => {
                tracing::warn!("No data directory found; theme preference will not persist");
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch.poll_interval_ms.max(1))
    }

    pub fn contact_validator(&self) -> ContactValidator {
        ContactValidator::new()
            .min_message_len(self.contact.min_message_len)
            .simulated_latency(Duration::from_millis(self.contact.simulated_latency_ms))
    }
}

/// Default configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}
