//! # Application Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_CATALOG_URL=http://localhost:3000                       │
//! │     STOREFRONT_PAGE_SIZE=10                                            │
//! │     STOREFRONT_TIMEOUT_SECS=30                                         │
//! │     STOREFRONT_DB_PATH=/tmp/storefront.db                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or storefront.toml in the platform config dir     │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "https://dummyjson.com"
//! page_size = 20
//! timeout_secs = 15
//!
//! [storage]
//! database_path = "/path/to/storefront.db"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_catalog::{CatalogConfig, CatalogConfigError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CatalogConfigError),

    #[error("Could not determine the platform data directory")]
    NoDataDir,
}

/// Local storage settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file for preferences. Platform data dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        Ok(())
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    ///
    /// Unparseable numbers are ignored with a warning.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("STOREFRONT_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.base_url = url;
        }

        if let Some(size) = lookup("STOREFRONT_PAGE_SIZE") {
            match size.parse::<u32>() {
                Ok(size) => self.catalog.page_size = size,
                Err(_) => warn!(value = %size, "Ignoring non-numeric STOREFRONT_PAGE_SIZE"),
            }
        }

        if let Some(secs) = lookup("STOREFRONT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => self.catalog.timeout_secs = secs,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric STOREFRONT_TIMEOUT_SECS"),
            }
        }

        if let Some(path) = lookup("STOREFRONT_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }
    }

    /// The SQLite file to open, creating the platform data dir if needed.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.storefront.storefront/storefront.db`
    /// - **Windows**: `%APPDATA%\storefront\storefront\data\storefront.db`
    /// - **Linux**: `~/.local/share/storefront/storefront.db`
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("storefront.db"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "storefront", "storefront")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.base_url, "https://dummyjson.com");
        assert_eq!(config.catalog.page_size, 20);
        assert_eq!(config.storage.database_path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [catalog]
            base_url = "http://localhost:4000"
            page_size = 10

            [storage]
            database_path = "/tmp/prefs.db"
            "#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:4000");
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.catalog.timeout_secs, 15);
        assert_eq!(
            config.storage.database_path,
            Some(PathBuf::from("/tmp/prefs.db"))
        );
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\npage_size = 0").unwrap();
        assert!(matches!(
            AppConfig::load(Some(file.path().to_path_buf())),
            Err(ConfigError::Invalid(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog\nbroken").unwrap();
        assert!(matches!(
            AppConfig::load(Some(file.path().to_path_buf())),
            Err(ConfigError::Parse(_))
        ));

        let fallback = AppConfig::load_or_default(Some(file.path().to_path_buf()));
        assert_eq!(fallback, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[
            ("STOREFRONT_CATALOG_URL", "http://127.0.0.1:9999"),
            ("STOREFRONT_PAGE_SIZE", "5"),
            ("STOREFRONT_TIMEOUT_SECS", "not-a-number"),
            ("STOREFRONT_DB_PATH", "/var/tmp/s.db"),
        ]));

        assert_eq!(config.catalog.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.catalog.page_size, 5);
        assert_eq!(config.catalog.timeout_secs, 15);
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/var/tmp/s.db")
        );
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("base_url"));
    }
}
