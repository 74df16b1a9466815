//! Search port used by the live search driver.

use async_trait::async_trait;

use crate::domain::{Page, Product};
use crate::error::Result;

/// Runs one product search.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Search for `query` and return the requested page.
    async fn search(&self, query: &str, page: usize) -> Result<Page<Product>>;
}
