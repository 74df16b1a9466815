//! Handlers for the product listing commands.

use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::command::{CategoryArgs, PageArg, ProductArg, SearchArgs};
use super::output;
use crate::adapter::outbound::http::HttpProductFeed;
use crate::application::listing::FEATURED_PER_CATEGORY;
use crate::application::{LiveSearch, ProductListing, SearchOutcome};
use crate::domain::category;
use crate::domain::{Page, Product, ProductId};
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Product")]
    title: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Sale")]
    sale: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            brand: product.brand.clone(),
            price: format!("{:.2}", product.price),
            sale: product
                .sale_price
                .map(|sale| format!("{sale:.2}"))
                .unwrap_or_default(),
        }
    }
}

/// Product listing over the configured feed.
pub fn product_listing(config: &Config) -> ProductListing {
    let feed = HttpProductFeed::from_config(&config.catalog);
    ProductListing::new(
        Arc::new(feed),
        config.catalog.cache_ttl(),
        config.catalog.page_size,
    )
}

/// Execute `search`, either once or in live mode.
pub async fn search(config: &Config, args: SearchArgs) -> Result<()> {
    let listing = Arc::new(product_listing(config));
    if args.live {
        return live_search(config, listing).await;
    }

    let page = listing.search(&args.query, args.page.page).await;
    print_page("search", &format!("Results for \"{}\"", args.query.trim()), &page);
    Ok(())
}

/// Execute `sale`.
pub async fn sale(config: &Config, args: PageArg) -> Result<()> {
    let page = product_listing(config).sale(args.page).await;
    print_page("sale", category::SALE_SECTION, &page);
    Ok(())
}

/// Execute `category`.
pub async fn category(config: &Config, args: CategoryArgs) -> Result<()> {
    let listing = product_listing(config);
    let Some((name, page)) = listing.category(&args.slug, args.page.page).await else {
        let known: Vec<&str> = category::slugs().collect();
        output::hint(&format!("known categories: {}", known.join(", ")));
        return Err(Error::NotFound(format!("category '{}'", args.slug)));
    };

    print_page("category", name, &page);
    Ok(())
}

/// Execute `show`.
pub async fn show(config: &Config, args: ProductArg) -> Result<()> {
    let id = ProductId::new(args.id);
    let Some(product) = product_listing(config).find(&id).await else {
        return Err(Error::NotFound(format!("product '{id}'")));
    };

    if output::is_json() {
        output::json_output(json!({ "command": "show", "product": product }));
        return Ok(());
    }

    output::section(&product.title);
    output::field("Id", &product.id);
    if !product.brand.is_empty() {
        output::field("Brand", &product.brand);
    }
    if !product.product_type.is_empty() {
        output::field("Category", &product.product_type);
    }
    match product.sale_price {
        Some(sale) => {
            let regular = output::muted(format!("{:.2}", product.price));
            output::field(
                "Price",
                format!("{} {regular}", output::positive(format!("{sale:.2}"))),
            );
        }
        None => output::field("Price", format!("{:.2}", product.price)),
    }
    if !product.description.is_empty() {
        println!();
        output::lines(&product.description);
    }
    output::hint(&format!(
        "add it with {}",
        output::highlight(format!("cartcompare cart add {id}"))
    ));
    Ok(())
}

/// Execute `featured`.
pub async fn featured(config: &Config) -> Result<()> {
    let sections = product_listing(config).featured(FEATURED_PER_CATEGORY).await;

    if output::is_json() {
        output::json_output(json!({ "command": "featured", "sections": sections }));
        return Ok(());
    }

    if sections.is_empty() {
        output::warning("No products available");
        return Ok(());
    }
    for section in &sections {
        output::section(&section.name);
        let rows: Vec<ProductRow> = section.products.iter().map(ProductRow::from).collect();
        output::lines(&Table::new(rows).to_string());
    }
    Ok(())
}

/// Search as queries arrive on stdin, one per line.
///
/// Only the last query typed within the debounce window is searched. At end
/// of input the pending search still reports before the command returns.
async fn live_search(config: &Config, listing: Arc<ProductListing>) -> Result<()> {
    let (mut search, mut outcomes) = LiveSearch::new(listing, config.search.debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    output::note("Type a query and press enter. End input with Ctrl-D.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(query) => search.input(query),
                    None => break,
                }
            }
            Some(outcome) = outcomes.recv() => print_outcome(&outcome),
        }
    }

    debug!("Live search input closed");
    search.finish();
    while let Some(outcome) = outcomes.recv().await {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Results { query, page } => {
            print_page("search", &format!("Results for \"{query}\""), page);
        }
        SearchOutcome::Failed { query, message } => {
            if output::is_json() {
                output::json_output(json!({ "command": "search", "outcome": outcome }));
            } else {
                output::warning(&format!("{query}: {message}"));
            }
        }
    }
}

fn print_page(command: &str, title: &str, page: &Page<Product>) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "title": title,
            "page": page,
        }));
        return;
    }

    output::section(title);
    if page.items.is_empty() {
        output::note("No products found");
        return;
    }

    let rows: Vec<ProductRow> = page.items.iter().map(ProductRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field(
        "Page",
        format!(
            "{} of {} ({} products)",
            page.current_page, page.total_pages, page.total_items
        ),
    );
    if page.has_next() {
        output::hint(&format!("next page: --page {}", page.current_page + 1));
    }
}
