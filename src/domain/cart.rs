//! Cart line items and the in-memory cart collection.
//!
//! [`Cart`] holds the pure data rules: one line item per product id,
//! quantities of at least one, and the derived count and total. Persistence
//! and the removal-confirmation flow live in `application::cart`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::DomainError;
use super::id::ProductId;
use super::money::{round_display, Price};

/// One product entry in the cart with its quantity.
///
/// Serialized with the field names of the persisted cart format
/// (`id`, `name`, `price`, `image`, `quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    #[serde(rename = "image", default)]
    pub image_url: String,
    pub quantity: u32,
}

impl CartLineItem {
    /// Unit price multiplied by quantity, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Resolved product fields needed to put a product in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    id: ProductId,
    name: String,
    unit_price: Price,
    image_url: String,
}

impl ItemDetails {
    /// Validate and build item details.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] for an empty id or name and
    /// [`DomainError::NegativePrice`] for a price below zero.
    pub fn try_new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Price,
        image_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into().trim().to_string();

        if id.is_empty() {
            return Err(DomainError::MissingField { field: "id" });
        }
        if name.is_empty() {
            return Err(DomainError::MissingField { field: "name" });
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(DomainError::NegativePrice { price: unit_price });
        }

        Ok(Self {
            id,
            name,
            unit_price,
            image_url: image_url.into(),
        })
    }

    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// Derived values handed to renderers after every cart change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    /// Sum of all quantities (badge count).
    pub count: u64,
    /// Cart total rounded to two decimals.
    pub total: Price,
}

/// Ordered collection of line items with at most one entry per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted records.
    ///
    /// Zero-quantity records are dropped and duplicate ids are merged into
    /// the first occurrence, so loaded state always satisfies the cart
    /// invariants even if the stored data does not.
    #[must_use]
    pub fn from_records(records: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for record in records {
            if record.quantity == 0 {
                debug!(product_id = %record.id, "Dropping zero-quantity cart record");
                continue;
            }
            match cart.position(&record.id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.quantity = existing.quantity.saturating_add(record.quantity);
                }
                None => cart.items.push(record),
            }
        }
        cart
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartLineItem> {
        self.items.get(index)
    }

    /// Index of the line item for `id`, if present.
    #[must_use]
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Add `quantity` units of a product, merging with an existing line.
    ///
    /// Returns the resulting quantity of the line item.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroQuantity`] when `quantity` is zero.
    pub fn add(&mut self, details: &ItemDetails, quantity: u32) -> Result<u32, DomainError> {
        if quantity == 0 {
            return Err(DomainError::ZeroQuantity);
        }

        if let Some(index) = self.position(details.id()) {
            let existing = &mut self.items[index];
            existing.quantity = existing.quantity.saturating_add(quantity);
            return Ok(existing.quantity);
        }

        self.items.push(CartLineItem {
            id: details.id().clone(),
            name: details.name().to_string(),
            unit_price: details.unit_price(),
            image_url: details.image_url().to_string(),
            quantity,
        });
        Ok(quantity)
    }

    /// Set the quantity of the line at `index`. A quantity of zero is ignored.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> bool {
        match self.items.get_mut(index) {
            Some(item) if quantity > 0 => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove the line item for `id`. Returns the removed item, if any.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLineItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of unit price times quantity, rounded to two decimals.
    #[must_use]
    pub fn total(&self) -> Price {
        round_display(self.items.iter().map(CartLineItem::line_total).sum())
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            count: self.count(),
            total: self.total(),
        }
    }
}
