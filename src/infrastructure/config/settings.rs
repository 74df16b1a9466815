//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Endpoint URLs and the storage
//! path can be overridden through environment variables, which may also be
//! supplied via a `.env` file.
//!
//! # Example
//!
//! ```no_run
//! use cartcompare::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::retail::{CatalogConfig, ComparisonConfig, SearchConfig, StorageConfig};
use crate::error::{ConfigError, Result};

/// Overrides `comparison.url`.
pub const ENV_COMPARE_URL: &str = "CARTCOMPARE_COMPARE_URL";
/// Overrides `catalog.feed_url`.
pub const ENV_FEED_URL: &str = "CARTCOMPARE_FEED_URL";
/// Overrides `storage.path`.
pub const ENV_STORAGE_PATH: &str = "CARTCOMPARE_STORAGE_PATH";

/// Number of retailers the comparison ranks.
pub const RETAILER_COUNT: usize = 2;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Parse configuration from TOML text, apply environment overrides and
    /// validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(ENV_COMPARE_URL) {
            self.comparison.url = url;
        }
        if let Some(url) = non_empty_env(ENV_FEED_URL) {
            self.catalog.feed_url = url;
        }
        if let Some(path) = non_empty_env(ENV_STORAGE_PATH) {
            self.storage.path = Some(PathBuf::from(path));
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        validate_url("comparison.url", &self.comparison.url)?;
        validate_url("catalog.feed_url", &self.catalog.feed_url)?;

        let retailers = &self.comparison.retailers;
        if retailers.len() != RETAILER_COUNT {
            return Err(ConfigError::InvalidValue {
                field: "comparison.retailers",
                reason: format!(
                    "exactly {RETAILER_COUNT} retailers are required, got {}",
                    retailers.len()
                ),
            }
            .into());
        }
        let mut keys = HashSet::new();
        for retailer in retailers {
            if retailer.key.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "comparison.retailers.key",
                }
                .into());
            }
            if retailer.name.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "comparison.retailers.name",
                }
                .into());
            }
            if !keys.insert(retailer.key.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "comparison.retailers.key",
                    reason: format!("duplicate retailer key '{}'", retailer.key),
                }
                .into());
            }
        }

        if self.catalog.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.page_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                }
                .into())
            }
        }

        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}
