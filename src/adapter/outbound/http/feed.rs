//! HTTP product feed source.
//!
//! The storefront feed is an XML document of `<product>` elements with
//! localized price strings such as `12,95 DKK`.

use async_trait::async_trait;
use tracing::{debug, info};

use super::client::HttpClient;
use super::dto::FeedDocument;
use crate::domain::Product;
use crate::error::CatalogError;
use crate::infrastructure::config::CatalogConfig;
use crate::port::ProductSource;

/// Fetches and parses the XML product feed.
pub struct HttpProductFeed {
    client: HttpClient,
    url: String,
}

impl HttpProductFeed {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(HttpClient::from_config(&config.http), config.feed_url.clone())
    }
}

/// Parse feed XML into products, skipping records without an id.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the document is not a product feed.
pub fn parse_feed(xml: &str) -> Result<Vec<Product>, CatalogError> {
    let document: FeedDocument =
        quick_xml::de::from_str(xml).map_err(|e| CatalogError::Decode(e.to_string()))?;

    let total = document.products.len();
    let products: Vec<Product> = document
        .products
        .into_iter()
        .filter_map(|record| record.into_product())
        .collect();

    if products.len() < total {
        debug!(skipped = total - products.len(), "Skipped feed records without id");
    }
    Ok(products)
}

#[async_trait]
impl ProductSource for HttpProductFeed {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        info!(url = %self.url, "Fetching product feed");
        let body = self.client.get_text(&self.url).await?;
        parse_feed(&body)
    }
}
