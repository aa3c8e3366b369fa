//! Configuration management for ec2-inventory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of lock shards in the result store
    #[serde(default = "default_cache_shards")]
    pub cache_shards: usize,

    /// Maximum number of items per page served by the inventory client
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Recorded inventory document to serve queries from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<PathBuf>,
}

fn default_cache_shards() -> usize {
    16
}

fn default_page_size() -> usize {
    1000
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ec2-inventory").join("config.yaml"))
    }

    /// Load configuration from the default path, falling back to defaults
    /// when no file has been written there.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings the store or the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()).into());
        }
        if !self.cache_shards.is_power_of_two() || self.cache_shards < 2 {
            log::warn!(
                "cache_shards {} rounded up to {}",
                self.cache_shards,
                self.cache_shards.max(2).next_power_of_two()
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_shards: default_cache_shards(),
            page_size: default_page_size(),
            inventory: None,
        }
    }
}
