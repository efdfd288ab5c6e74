//! Configuration loading utilities
//!
//! Provides utilities for locating and loading the configuration file
//! from the filesystem.

use crate::{Config, ConfigError, Result};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside a configuration root
pub const CONFIG_FILE: &str = "groupboard.toml";

/// Configuration loader
pub struct ConfigLoader {
    /// Root path for configuration
    root: PathBuf,
    /// Whether to use default values for a missing config
    use_defaults: bool,
    /// Whether to validate configuration after loading
    validate: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            use_defaults: true,
            validate: true,
        }
    }

    /// Create a loader for user configuration
    pub fn user() -> Result<Self> {
        Ok(Self::new(get_config_root()?))
    }

    /// Set whether to use defaults for a missing config
    pub fn use_defaults(mut self, use_defaults: bool) -> Self {
        self.use_defaults = use_defaults;
        self
    }

    /// Set whether to validate configuration
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Load the configuration
    pub fn load(&self) -> Result<Config> {
        let path = self.config_path();
        if !path.exists() {
            if self.use_defaults {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            } else {
                return Err(ConfigError::NotFound(path));
            }
        }

        let config = Config::load_from(&path)?;

        if self.validate {
            config.validate()?;
        }

        Ok(config)
    }

    /// Get the configuration root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if the configuration file exists
    pub fn has_config(&self) -> bool {
        self.config_path().exists()
    }

    /// Get path to the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

/// Default configuration paths
pub mod paths {
    use std::path::PathBuf;

    /// User configuration root
    pub fn user_config() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("groupboard"))
    }
}

/// Environment variable names used by the configuration system
pub mod env_vars {
    /// Configuration root override
    pub const CONFIG_ROOT: &str = "GROUPBOARD_CONFIG_ROOT";
    /// Source URL override
    pub const URL: &str = "GROUPBOARD_URL";
}

/// Get configuration root from environment or the user config directory
pub fn get_config_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var(env_vars::CONFIG_ROOT) {
        return Ok(PathBuf::from(root));
    }
    paths::user_config()
        .ok_or_else(|| ConfigError::Invalid("Could not determine user config path".to_string()))
}
