use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use userseed_core::{DEFAULT_ADDRESS_CSV, DEFAULT_SCRIPT_FILE};

/// Settings file read from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "userseed.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml decode error in {path}: {source}")]
    TomlDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional values from a TOML settings file. Command-line flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub clear_screen: Option<bool>,
    pub run_dir: Option<PathBuf>,
    pub address_csv: Option<PathBuf>,
}

impl Settings {
    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_FILE))
    }

    pub fn address_csv_or_default(&self) -> PathBuf {
        self.address_csv
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ADDRESS_CSV))
    }

    pub fn clear_screen_or_default(&self) -> bool {
        self.clear_screen.unwrap_or(true)
    }
}

/// Loads settings from `explicit`, or from [`DEFAULT_SETTINGS_FILE`] when it
/// exists. An explicit path that does not exist is an error.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::TomlDecode { path, source })
}
