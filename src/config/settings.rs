use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::City;

fn default_base_url() -> String {
    "http://api.aladhan.com/v1".to_string()
}
fn default_method() -> u8 {
    2
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_city() -> String {
    "dublin".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Calculation method id understood by the timing source (2 = ISNA)
    #[serde(default = "default_method")]
    pub method: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            method: default_method(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            dark_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "waqt").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// The configured startup city, or the first city if the name is unknown.
    pub fn city(&self) -> City {
        City::find(&self.display.city).unwrap_or_else(|| {
            log::warn!(
                "Unknown city '{}' in config, falling back to {}",
                self.display.city,
                City::default().name
            );
            City::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("[display]\ncity = \"London\"\n").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.city().id, "london");
        assert!(!config.display.dark_mode);
    }

    #[test]
    fn test_unknown_city_falls_back() {
        let mut config = AppConfig::default();
        config.display.city = "Atlantis".to_string();
        assert_eq!(config.city(), City::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.api.method = 4;
        config.display.dark_mode = true;
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nmethod = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
