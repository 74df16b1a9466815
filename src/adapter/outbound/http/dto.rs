//! Wire formats of the catalog endpoint and the product feed.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    parse_price, CatalogEntry, CatalogSnapshot, Price, Product, ProductId, RetailerCatalog,
};
use crate::error::CatalogError;
use crate::infrastructure::config::RetailerConfig;

/// Catalog endpoint response: a success flag plus one list per retailer key.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub lists: HashMap<String, Value>,
}

/// One product record in a retailer list.
#[derive(Debug, Deserialize)]
pub struct CatalogRecord {
    #[serde(alias = "productId", alias = "id")]
    pub product_id: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default, alias = "salePrice")]
    pub sale_price: Value,
}

impl CatalogResponse {
    /// Convert into a snapshot ordered like `retailers`.
    ///
    /// Records without an id or a numeric price are skipped.
    pub fn into_snapshot(
        mut self,
        retailers: &[RetailerConfig],
    ) -> Result<CatalogSnapshot, CatalogError> {
        if !self.success {
            return Err(CatalogError::Unsuccessful);
        }

        let mut catalogs = Vec::with_capacity(retailers.len());
        for retailer in retailers {
            let Some(Value::Array(records)) = self.lists.remove(&retailer.key) else {
                return Err(CatalogError::MissingRetailer {
                    key: retailer.key.clone(),
                });
            };

            let total = records.len();
            let entries: Vec<CatalogEntry> = records
                .into_iter()
                .filter_map(|raw| {
                    serde_json::from_value::<CatalogRecord>(raw)
                        .ok()
                        .and_then(CatalogRecord::into_entry)
                })
                .collect();

            if entries.len() < total {
                debug!(
                    retailer = %retailer.name,
                    skipped = total - entries.len(),
                    "Skipped unusable catalog records"
                );
            }
            catalogs.push(RetailerCatalog::from_entries(retailer.name.clone(), entries));
        }

        Ok(CatalogSnapshot::new(catalogs))
    }
}

impl CatalogRecord {
    fn into_entry(self) -> Option<CatalogEntry> {
        let product_id = match self.product_id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            _ => return None,
        };
        let product_id = ProductId::new(product_id);
        if product_id.is_empty() {
            return None;
        }

        let price = decimal_from_value(&self.price)?;
        let sale_price = decimal_from_value(&self.sale_price);

        Some(CatalogEntry::new(product_id, price, sale_price))
    }
}

/// Interpret a JSON number or numeric string as a price.
fn decimal_from_value(value: &Value) -> Option<Price> {
    match value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => parse_price(text),
        _ => None,
    }
}

/// Root of the XML product feed.
#[derive(Debug, Deserialize)]
pub struct FeedDocument {
    #[serde(rename = "product", default)]
    pub products: Vec<FeedProduct>,
}

/// One `<product>` element of the feed.
#[derive(Debug, Default, Deserialize)]
pub struct FeedProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub sale_price: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(rename = "imageLink", default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
}

impl FeedProduct {
    /// Convert into a domain product.
    ///
    /// An unparseable regular price becomes zero; a missing, unparseable or
    /// zero sale price means the product is not on sale. Records without an
    /// id are rejected.
    pub fn into_product(self) -> Option<Product> {
        let id = ProductId::new(self.id.unwrap_or_default());
        if id.is_empty() {
            return None;
        }

        let price = self
            .price
            .as_deref()
            .and_then(parse_price)
            .unwrap_or(Decimal::ZERO);
        let sale_price = self
            .sale_price
            .as_deref()
            .and_then(parse_price)
            .filter(|sale| !sale.is_zero());

        Some(Product {
            id,
            title: self.title.unwrap_or_default().trim().to_string(),
            price,
            sale_price,
            description: self.description.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            image_url: self.image_link.unwrap_or_default(),
            product_type: self.product_type.unwrap_or_default(),
        })
    }
}
