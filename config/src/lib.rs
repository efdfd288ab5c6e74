//! Groupboard Configuration
//!
//! This crate holds the settings that control where the group list comes
//! from and how it is shown.
//!
//! # Configuration File
//!
//! ```text
//! $XDG_CONFIG_HOME/groupboard/groupboard.toml
//! ```
//!
//! ```toml
//! [source]
//! url = "https://raw.githubusercontent.com/3all/vkTest/master/groups.json"
//! # file = "groups.json"
//! delay_ms = 1000
//!
//! [display]
//! show_friends = true
//! color = true
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use groupboard_config::ConfigLoader;
//!
//! let config = ConfigLoader::user().unwrap().load().unwrap();
//! println!("Fetching from {}", config.source.url);
//! ```

pub mod error;
pub mod loader;

pub use error::{ConfigError, Result};
pub use loader::{env_vars, paths, ConfigLoader, CONFIG_FILE};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default location of the published group list
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/3all/vkTest/master/groups.json";

/// Default pause before the request is issued
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Upper bound accepted for `source.delay_ms`
pub const MAX_DELAY_MS: u64 = 60_000;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the group list is loaded from
    pub source: SourceConfig,
    /// Table rendering options
    pub display: DisplayConfig,
}

/// Data source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Remote JSON document
    pub url: String,
    /// Local JSON document, takes precedence over `url` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Fixed delay before the request, in milliseconds
    pub delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            file: None,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl SourceConfig {
    /// Parse and check the remote URL
    pub fn parsed_url(&self) -> Result<Url> {
        let url = Url::parse(&self.url)
            .map_err(|e| ConfigError::Invalid(format!("Invalid source url '{}': {}", self.url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ConfigError::Invalid(format!(
                "Unsupported source url scheme: {}",
                scheme
            ))),
        }
    }

    /// Human readable description of the source
    pub fn describe(&self) -> String {
        match &self.file {
            Some(path) => path.display().to_string(),
            None => self.url.clone(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// List friend names under each group
    pub show_friends: bool,
    /// Style output with terminal colors
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_friends: true,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the user configuration directory, falling
    /// back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match ConfigLoader::user() {
            Ok(loader) => loader.load(),
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Check the configuration for values the fetcher cannot use
    pub fn validate(&self) -> Result<()> {
        if self.source.file.is_none() {
            self.source.parsed_url()?;
        }

        if self.source.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "source.delay_ms must be at most {}, got {}",
                MAX_DELAY_MS, self.source.delay_ms
            )));
        }

        if let Some(file) = &self.source.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("source.file is empty".to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.delay_ms, 1000);
        assert_eq!(config.source.file, None);
        assert!(config.display.show_friends);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("[source]\ndelay_ms = 0\n").unwrap();
        assert_eq!(config.source.delay_ms, 0);
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_file_source() {
        let config = Config::from_toml("[source]\nfile = \"groups.json\"\nurl = \"nope\"\n").unwrap();
        assert_eq!(config.source.file, Some(PathBuf::from("groups.json")));
        assert_eq!(config.source.describe(), "groups.json");
        // The url is not used when a file is configured.
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = Config::default();
        config.source.url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.source.url = "ftp://example.com/groups.json".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_delay_bound() {
        let mut config = Config::default();
        config.source.delay_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.display.color = false;
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let mut config = Config::default();
        config.source.delay_ms = 250;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_unknown_toml_syntax_is_parse_error() {
        let result = Config::from_toml("[source\nurl = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
