//! Retailer comparison and product listing settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::http::HttpConfig;
use crate::application::listing::{DEFAULT_CACHE_TTL, DEFAULT_PAGE_SIZE};
use crate::application::search::DEFAULT_DEBOUNCE;

/// A retailer taking part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetailerConfig {
    /// Field name of this retailer's list in the catalog response.
    pub key: String,
    /// Display name.
    pub name: String,
}

impl RetailerConfig {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Store comparison settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonConfig {
    /// Catalog endpoint returning both retailers' price lists.
    #[serde(default = "default_compare_url")]
    pub url: String,
    /// Retailers in declared order; ties in ranking keep this order.
    #[serde(default = "default_retailers")]
    pub retailers: Vec<RetailerConfig>,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_compare_url() -> String {
    "http://localhost:5001/api/compare-prices".into()
}

fn default_retailers() -> Vec<RetailerConfig> {
    vec![
        RetailerConfig::new("rema1000", "Rema 1000"),
        RetailerConfig::new("netto", "Netto"),
    ]
}

impl ComparisonConfig {
    #[must_use]
    pub fn retailer_names(&self) -> Vec<String> {
        self.retailers.iter().map(|r| r.name.clone()).collect()
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            url: default_compare_url(),
            retailers: default_retailers(),
            http: HttpConfig::default(),
        }
    }
}

/// Product feed and listing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// XML product feed.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// How long a fetched feed is reused, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Products per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_feed_url() -> String {
    "https://cphapp.rema1000.dk/api/v1/products.xml".into()
}

const fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL.as_secs()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl CatalogConfig {
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            page_size: default_page_size(),
            http: HttpConfig::default(),
        }
    }
}

/// Live search settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a search is issued, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(300)
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Where the cart and other client state is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// JSON storage file; defaults to `~/.cartcompare/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
