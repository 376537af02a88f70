//! # Catalog Configuration
//!
//! The `[catalog]` table of `storefront.toml`. Loading (file, environment)
//! lives in the app crate; this module owns the values and their rules.
//!
//! ```toml
//! [catalog]
//! base_url = "https://dummyjson.com"
//! page_size = 20
//! timeout_secs = 15
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Public demo API the client talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Largest page the feed will request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Rejected catalog settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogConfigError {
    #[error("Catalog base URL must start with http:// or https://, got: {0}")]
    InvalidBaseUrl(String),

    #[error("page_size must be between 1 and {MAX_PAGE_SIZE}, got: {0}")]
    InvalidPageSize(u32),

    #[error("timeout_secs must be greater than 0")]
    InvalidTimeout,
}

/// Settings for the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root of the catalog API, without a trailing `/products`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Products per page in the browsing feed.
    /// Default: 20
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Whole-request timeout (seconds).
    /// Default: 15
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    /// Points the client at another server, keeping the other defaults.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses the base URL. Only `http` and `https` are accepted.
    pub fn parsed_base_url(&self) -> Result<Url, CatalogConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|_| CatalogConfigError::InvalidBaseUrl(self.base_url.clone()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(CatalogConfigError::InvalidBaseUrl(self.base_url.clone())),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogConfigError> {
        self.parsed_base_url()?;

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(CatalogConfigError::InvalidPageSize(self.page_size));
        }

        if self.timeout_secs == 0 {
            return Err(CatalogConfigError::InvalidTimeout);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://dummyjson.com");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = CatalogConfig::with_base_url("ftp://example.com");
        assert!(matches!(
            config.validate(),
            Err(CatalogConfigError::InvalidBaseUrl(_))
        ));

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        config.page_size = 0;
        assert_eq!(
            config.validate(),
            Err(CatalogConfigError::InvalidPageSize(0))
        );

        config.page_size = 101;
        assert!(config.validate().is_err());

        config.page_size = 100;
        config.timeout_secs = 0;
        assert_eq!(config.validate(), Err(CatalogConfigError::InvalidTimeout));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CatalogConfig = toml::from_str("page_size = 50").unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 15);
    }
}
