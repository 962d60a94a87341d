//! Configuration module for listfilter
//!
//! Holds the defaults applied to new filter models and the decode policy
//! for criteria in URLs. Configuration is stored as TOML in the user's
//! config directory (`~/.config/listfilter/config.toml` on Linux). A
//! missing file means defaults.

use crate::filters::{DEFAULT_ITEMS_PER_PAGE, SortDirection};
use crate::query::DecodePolicy;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_items_per_page() -> u32 {
    DEFAULT_ITEMS_PER_PAGE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ListFilterConfig {
    /// Page size of new filter models
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,

    /// Initial sort direction of new filter models
    #[serde(default)]
    pub sort_direction: SortDirection,

    /// How undecodable criteria in URLs are handled
    #[serde(default)]
    pub decode_policy: DecodePolicy,
}

impl Default for ListFilterConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort_direction: SortDirection::Asc,
            decode_policy: DecodePolicy::Strict,
        }
    }
}

impl ListFilterConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("listfilter").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// an existing file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if
    /// `items_per_page` is zero.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `items_per_page` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_page == 0 {
            return Err(ConfigError::Message(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the path cannot be determined or writing fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ListFilterConfig::default();
        assert_eq!(config.items_per_page, 40);
        assert_eq!(config.sort_direction, SortDirection::Asc);
        assert_eq!(config.decode_policy, DecodePolicy::Strict);
    }

    #[test]
    fn test_config_path() {
        let path = ListFilterConfig::config_path().unwrap();
        assert!(path.to_string_lossy().contains("listfilter"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ListFilterConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ListFilterConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "decode_policy = \"skip\"\n").unwrap();

        let config = ListFilterConfig::load_from(&path).unwrap();
        assert_eq!(config.decode_policy, DecodePolicy::Skip);
        assert_eq!(config.items_per_page, 40);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = ListFilterConfig {
            items_per_page: 60,
            sort_direction: SortDirection::Desc,
            decode_policy: DecodePolicy::Skip,
        };

        config.save_to(&path).unwrap();
        assert_eq!(ListFilterConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "items_per_page = 0\n").unwrap();

        assert!(ListFilterConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sort_direction = \"sideways\"\n").unwrap();

        assert!(ListFilterConfig::load_from(&path).is_err());
    }
}
