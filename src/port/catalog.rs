//! Catalog ports for retailer prices and the product feed.
//!
//! These are the network-facing integration points; HTTP implementations
//! live in `adapter::outbound::http`.

use async_trait::async_trait;

use crate::domain::{CatalogSnapshot, Product};
use crate::error::CatalogError;

/// Fetches the price catalogs of the compared retailers.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Fetch one catalog per retailer, in declared retailer order.
    async fn fetch_catalogs(&self) -> Result<CatalogSnapshot, CatalogError>;
}

/// Fetches the storefront product feed.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch every product currently listed.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
