//! Handler for the `compare` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::{cart, output};
use crate::adapter::outbound::http::HttpCatalogFetcher;
use crate::application::{Comparison, ComparisonEngine};
use crate::error::Result;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Retailer")]
    retailer: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Price the persisted cart at every configured retailer.
pub async fn execute(config: &Config) -> Result<()> {
    let (store, _renderer) = cart::open_store(config);
    let engine = ComparisonEngine::new(config.comparison.retailer_names());
    let fetcher = HttpCatalogFetcher::from_config(&config.comparison);

    let pb = output::spinner("Fetching retailer prices");
    let comparison = engine.compare(store.items(), &fetcher).await?;
    match &comparison.failure {
        Some(reason) => output::spinner_fail(&pb, &format!("Price lookup failed: {reason}")),
        None => output::spinner_success(&pb, "Prices fetched"),
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "compare",
            "lines": store.items().len(),
            "comparison": comparison,
        }));
        return Ok(());
    }

    print_comparison(&comparison, store.items().is_empty());
    Ok(())
}

fn print_comparison(comparison: &Comparison, empty_cart: bool) {
    output::section("Price comparison");

    let rows: Vec<ResultRow> = comparison
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| ResultRow {
            rank: index + 1,
            retailer: result.retailer_name.clone(),
            total: format!("{:.2}", result.total_price),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    if comparison.is_degraded() {
        output::warning("Totals are zero because the catalog could not be fetched");
        return;
    }
    if empty_cart {
        output::hint(&format!(
            "add products with {}",
            output::highlight("cartcompare cart add <id>")
        ));
        return;
    }
    if let Some(cheapest) = comparison.cheapest() {
        println!();
        output::field(
            "Cheapest",
            format!("{} ({:.2})", output::positive(&cheapest.retailer_name), cheapest.total_price),
        );
    }
}
