//! Retailer catalog types.

use std::collections::HashMap;

use super::id::ProductId;
use super::money::Price;

/// One product's price listing at a retailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub product_id: ProductId,
    pub price: Price,
    pub sale_price: Option<Price>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, price: Price, sale_price: Option<Price>) -> Self {
        Self {
            product_id: product_id.into(),
            price,
            sale_price,
        }
    }

    /// Sale price when present, otherwise the regular price.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }
}

/// A retailer's price listing keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetailerCatalog {
    name: String,
    entries: HashMap<ProductId, CatalogEntry>,
}

impl RetailerCatalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from entries. Later duplicates replace earlier ones.
    pub fn from_entries(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Self {
        let mut catalog = Self::new(name);
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.product_id.clone(), entry);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalogs returned by one fetch, in declared retailer order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    retailers: Vec<RetailerCatalog>,
}

impl CatalogSnapshot {
    #[must_use]
    pub fn new(retailers: Vec<RetailerCatalog>) -> Self {
        Self { retailers }
    }

    #[must_use]
    pub fn retailers(&self) -> &[RetailerCatalog] {
        &self.retailers
    }
}
