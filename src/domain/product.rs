//! Product listing records from the storefront feed.

use serde::Serialize;

use super::cart::ItemDetails;
use super::error::DomainError;
use super::id::ProductId;
use super::money::Price;

/// A product as listed in the storefront feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub sale_price: Option<Price>,
    pub description: String,
    pub brand: String,
    pub image_url: String,
    pub product_type: String,
}

impl Product {
    #[must_use]
    pub const fn is_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Price the shopper pays: the sale price when on sale.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }

    /// True if every term occurs in the lower-cased title or brand.
    ///
    /// Terms are expected to be lower-cased already. No terms matches all.
    #[must_use]
    pub fn matches_terms(&self, terms: &[String]) -> bool {
        if terms.is_empty() {
            return true;
        }
        let title = self.title.to_lowercase();
        let brand = self.brand.to_lowercase();
        terms
            .iter()
            .all(|term| title.contains(term.as_str()) || brand.contains(term.as_str()))
    }

    /// Cart details for this product at its effective price.
    ///
    /// # Errors
    ///
    /// Fails when the product lacks an id or title.
    pub fn item_details(&self) -> Result<ItemDetails, DomainError> {
        ItemDetails::try_new(
            self.id.clone(),
            self.title.clone(),
            self.effective_price(),
            self.image_url.clone(),
        )
    }
}

/// Split a search query into lower-cased terms.
#[must_use]
pub fn search_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}
