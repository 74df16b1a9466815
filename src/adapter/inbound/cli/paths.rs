//! Path utilities for cartcompare.
//!
//! All data lives under `~/.cartcompare/`:
//! - `~/.cartcompare/config.toml` - main configuration
//! - `~/.cartcompare/storage.json` - persisted key-value storage (the cart)

use std::path::PathBuf;

use crate::infrastructure::config::StorageConfig;

/// Returns the cartcompare home directory (`~/.cartcompare/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cartcompare")
}

/// Returns the default config file path (`~/.cartcompare/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default storage file path (`~/.cartcompare/storage.json`).
pub fn default_storage() -> PathBuf {
    home_dir().join("storage.json")
}

/// Resolve the storage file, preferring the configured path.
pub fn storage_path(config: &StorageConfig) -> PathBuf {
    config.path.clone().unwrap_or_else(default_storage)
}
