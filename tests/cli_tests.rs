//! CLI integration tests against mock feed and catalog endpoints.

mod support;

use std::path::PathBuf;
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use support::fixtures::{catalog_json, FEED_XML};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A CLI invocation isolated to a temp directory and a mock server.
struct Sandbox {
    dir: TempDir,
    server: MockServer,
}

impl Sandbox {
    async fn start() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_XML))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/compare-prices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
            .mount(&server)
            .await;

        Self {
            dir: TempDir::new().unwrap(),
            server,
        }
    }

    fn storage_path(&self) -> PathBuf {
        self.dir.path().join("storage.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cartcompare");
        cmd.arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .env("CARTCOMPARE_STORAGE_PATH", self.storage_path())
            .env("CARTCOMPARE_FEED_URL", format!("{}/products.xml", self.server.uri()))
            .env(
                "CARTCOMPARE_COMPARE_URL",
                format!("{}/api/compare-prices", self.server.uri()),
            )
            .env("RUST_LOG", "warn");
        cmd
    }
}

#[test]
fn test_help() {
    cargo_bin_cmd!("cartcompare")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cart"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("featured"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_cart_reports_zero() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["--json", "cart", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"))
        .stdout(predicate::str::contains("\"total\":\"0.00\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn added_products_are_persisted() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["cart", "add", "1001", "--quantity", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Letmælk 1 L"));

    assert!(sandbox.storage_path().exists());

    sandbox
        .cmd()
        .args(["--json", "cart", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":2"))
        .stdout(predicate::str::contains("\"total\":\"25.90\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn adding_unknown_product_fails() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["cart", "add", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn decrement_to_zero_needs_confirmation() {
    let sandbox = Sandbox::start().await;
    sandbox.cmd().args(["cart", "add", "1003"]).assert().success();

    // No terminal: the prompt is skipped and the item kept.
    sandbox
        .cmd()
        .args(["--json", "cart", "qty", "1", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":1"));

    sandbox
        .cmd()
        .args(["--json", "cart", "qty", "1", "-1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn quantity_change_out_of_range_fails() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["cart", "qty", "3", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cart line 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn compare_ranks_cheapest_first() {
    let sandbox = Sandbox::start().await;
    sandbox
        .cmd()
        .args(["cart", "add", "1001", "-n", "2"])
        .assert()
        .success();

    let output = sandbox
        .cmd()
        .args(["--json", "compare"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|line| line.contains("\"command\":\"compare\""))
        .unwrap_or_else(|| panic!("no compare result in {stdout}"));
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    let results = &value["comparison"]["results"];

    assert_eq!(results[0]["retailer_name"], "Netto");
    assert_eq!(results[0]["total_price"], "23.00");
    assert_eq!(results[1]["retailer_name"], "Rema 1000");
    assert_eq!(results[1]["total_price"], "25.90");
    assert!(value["comparison"]["failure"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn compare_survives_catalog_outage() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .env("CARTCOMPARE_COMPARE_URL", format!("{}/missing", sandbox.server.uri()))
        .args(["compare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rema 1000"))
        .stdout(predicate::str::contains("0.00"));
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_commands_read_the_feed() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["search", "juice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appelsinjuice"))
        .stdout(predicate::str::contains("Letmælk").not());

    sandbox
        .cmd()
        .args(["sale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skyr Vanilje"));

    sandbox
        .cmd()
        .args(["show", "1002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20.00"));
}

#[tokio::test(flavor = "multi_thread")]
async fn live_search_reports_and_exits_at_end_of_input() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["--json", "search", "--live"])
        .write_stdin("juice\n")
        .timeout(Duration::from_secs(15))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\":\"search\""))
        .stdout(predicate::str::contains("Appelsinjuice"));
}

#[tokio::test(flavor = "multi_thread")]
async fn live_search_exits_when_feed_is_unreachable() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("cartcompare")
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .env("CARTCOMPARE_STORAGE_PATH", dir.path().join("storage.json"))
        .env("CARTCOMPARE_FEED_URL", "http://127.0.0.1:9/products.xml")
        .env("RUST_LOG", "warn")
        .args(["--json", "search", "--live"])
        .write_stdin("mælk\n")
        .timeout(Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_items\":0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_category_fails() {
    let sandbox = Sandbox::start().await;

    sandbox
        .cmd()
        .args(["category", "Elektronik"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category 'Elektronik'"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[catalog]\npage_size = 0\n").unwrap();

    cargo_bin_cmd!("cartcompare")
        .arg("--config")
        .arg(&config)
        .args(["cart", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
