use std::fs;

use cartcompare::error::{ConfigError, Error};
use cartcompare::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_full_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "warn"
format = "pretty"

[storage]
path = "/var/lib/cartcompare/storage.json"

[comparison]
url = "https://prices.example/api/compare-prices"
retailers = [
    { key = "rema1000", name = "Rema 1000" },
    { key = "netto", name = "Netto" },
]

[comparison.http]
timeout_ms = 5000
retry_max_attempts = 2

[catalog]
feed_url = "https://feed.example/products.xml"
cache_ttl_secs = 600
page_size = 30

[search]
debounce_ms = 150
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(
        config.storage.path.as_deref(),
        Some(std::path::Path::new("/var/lib/cartcompare/storage.json"))
    );
    assert_eq!(config.comparison.http.timeout_ms, 5000);
    assert_eq!(config.comparison.http.retry_max_attempts, 2);
    assert_eq!(config.catalog.cache_ttl().as_secs(), 600);
    assert_eq!(config.catalog.page_size, 30);
    assert_eq!(config.search.debounce().as_millis(), 150);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(
        config.comparison.retailer_names(),
        vec!["Rema 1000".to_string(), "Netto".to_string()]
    );
    assert_eq!(config.catalog.page_size, 60);
}

#[test]
fn missing_file_is_an_error_for_load() {
    let dir = TempDir::new().unwrap();

    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn config_rejects_empty_retailer_name() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[comparison]
retailers = [
    { key = "rema1000", name = "Rema 1000" },
    { key = "netto", name = "  " },
]
"#,
    );

    match Config::load_or_default(&path) {
        Err(Error::Config(ConfigError::MissingField {
            field: "comparison.retailers.name",
        })) => {}
        Err(err) => panic!("Expected missing retailer name, got {err}"),
        Ok(_) => panic!("Expected blank retailer name to be rejected"),
    }
}

#[test]
fn config_rejects_empty_compare_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[comparison]\nurl = \"\"\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: "comparison.url"
        }))
    ));
}
