//! Application configuration.

use crate::consts::cli_consts::{
    APP_DIR_NAME, CONFIG_FILE_NAME, STORE_DIR_NAME, quote_provider::DEFAULT_QUOTE_URL,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Directory holding the config file and the default store, under `$HOME`.
pub fn get_app_dir() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(APP_DIR_NAME))
}

pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_app_dir()?.join(CONFIG_FILE_NAME))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Endpoint returning a random `{quote, author}` JSON object.
    pub quote_url: String,
    /// Where liked quotes are stored. Defaults to `<app dir>/store`.
    pub store_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            store_dir: None,
        }
    }
}

impl Config {
    /// Create Config with the given quote endpoint.
    #[allow(unused)]
    pub fn new(quote_url: String) -> Self {
        Config {
            quote_url,
            store_dir: None,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_file(path)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The store directory to use, falling back to `<app_dir>/store`.
    pub fn resolve_store_dir(&self, app_dir: &Path) -> PathBuf {
        self.store_dir
            .clone()
            .unwrap_or_else(|| app_dir.join(STORE_DIR_NAME))
    }
}
