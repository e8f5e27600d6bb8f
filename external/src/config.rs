//! On-disk configuration.
//!
//! Stored in `~/.tinsel/config.json`. Every field is optional in the file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `day<N>.txt` input files.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is not set, e.g. `"warn"` or `"debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print answers as JSON instead of sentences.
    #[serde(default)]
    pub json: bool,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("inputs")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            log_level: default_log_level(),
            json: false,
        }
    }
}

/// Get the config file path (`~/.tinsel/config.json`).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".tinsel").join("config.json"))
}

/// Load the config from its default location.
///
/// Returns the default config if the file doesn't exist or can't be read.
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) if path.exists() => load_config_from(&path).unwrap_or_default(),
        _ => Config::default(),
    }
}

/// Load the config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the config to its default location.
pub fn save_config(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

/// Save the config to an explicit path, creating parent directories.
pub fn save_config_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;

    Ok(())
}
