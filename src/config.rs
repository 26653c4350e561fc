//! Application configuration
//!
//! Read from `config.toml` in the user's config directory. A missing file
//! means defaults; unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progress::JsonProgressStore;

const APP_DIR: &str = "wordwizards";
const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding `Year3.json` ... `Year6.json`
    pub content_dir: PathBuf,
    /// Directory for progress data
    pub data_dir: PathBuf,
    /// Voice language for pronunciation (e.g. "en-GB")
    pub speech_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = JsonProgressStore::default_data_dir()
            .unwrap_or_else(|_| PathBuf::from(".").join(APP_DIR));
        Self {
            content_dir: PathBuf::from("content"),
            data_dir,
            speech_language: "en-GB".to_string(),
        }
    }
}

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load from a file, falling back to defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        log::debug!("Config loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(&temp_dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.speech_language, "en-GB");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "contentDir = \"/srv/words\"\nspeechLanguage = \"en-US\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.content_dir, PathBuf::from("/srv/words"));
        assert_eq!(config.speech_language, "en-US");
        assert_eq!(config.data_dir, AppConfig::default().data_dir);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "contentDir = [").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Toml(_))));
    }
}
