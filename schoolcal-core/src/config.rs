//! Calendar configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::export::DEFAULT_EXPORT_PREFIX;
use crate::store::DEFAULT_STORAGE_KEY;

static DEFAULT_DATA_DIR: &str = "~/.local/share/schoolcal";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/schoolcal/config.toml, overridable with
/// `SCHOOLCAL_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Where the event document lives
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File name prefix for exports
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            export_prefix: default_export_prefix(),
            log_level: default_log_level(),
        }
    }
}

impl CalendarConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("schoolcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented template on first run.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`; missing files fall back to defaults.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("SCHOOLCAL").try_parsing(true))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// `data_dir` with a leading `~` expanded
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn to_toml(&self) -> CalendarResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# schoolcal configuration

# Where events are stored:
# data_dir = \"{}\"

# Name of the event document inside data_dir:
# storage_key = \"{}\"

# Exports are named <export_prefix>-<YYYY-MM-DD>.json / .ics:
# export_prefix = \"{}\"

# Log filter when RUST_LOG is unset:
# log_level = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY, DEFAULT_EXPORT_PREFIX, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
