//! Calculator configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::preferences::{Mode, DEFAULT_THEME};

/// Overrides the data directory
pub const DATA_DIR_ENV: &str = "TABCALC_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Theme used until preferences are saved
    pub default_theme: String,
    /// Mode used until preferences are saved
    pub default_mode: Mode,
    /// Save after every tab change and evaluation
    pub autosave: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tabcalc.db"),
            default_theme: DEFAULT_THEME.to_string(),
            default_mode: Mode::Dark,
            autosave: true,
        }
    }

    /// `TABCALC_DATA_DIR`, else `TabCalc/` under the platform data dir,
    /// else `.tabcalc` in the working directory
    pub fn data_dir() -> PathBuf {
        env_path(DATA_DIR_ENV)
            .or_else(|| platform_data_dir().map(|dir| dir.join("TabCalc")))
            .unwrap_or_else(|| PathBuf::from(".tabcalc"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_data_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        env_path("LOCALAPPDATA")
    } else if cfg!(target_os = "macos") {
        env_path("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        env_path("XDG_DATA_HOME")
            .or_else(|| env_path("HOME").map(|home| home.join(".local").join("share")))
    }
}
