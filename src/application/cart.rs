//! Cart store service.
//!
//! Owns the cart for the lifetime of a session: loads it from key-value
//! storage, applies mutations, writes the full cart back after every change
//! and hands the recomputed summary to the renderer.
//!
//! Decrementing a line to zero does not remove it outright. The store moves
//! into [`RemovalState::AwaitingConfirmation`] and the caller must confirm or
//! cancel via [`CartStore::confirm_pending_removal`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::error::DomainError;
use crate::domain::{
    Cart, CartLineItem, CartSummary, ItemDetails, Price, ProductId, RemovalState,
};
use crate::port::{CartRenderer, KeyValueStorage};

/// Storage key of the persisted cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Outcome of [`CartStore::change_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The new quantity was applied and persisted.
    Applied { product_id: ProductId, quantity: u32 },
    /// The change would empty the line; confirmation is now pending.
    ConfirmationRequired { product_id: ProductId, name: String },
    /// No line item exists at the index.
    OutOfRange { index: usize },
}

/// Persisted shopping cart with explicit mutators.
pub struct CartStore {
    storage: Arc<dyn KeyValueStorage>,
    renderer: Arc<dyn CartRenderer>,
    cart: Cart,
    removal: RemovalState,
}

impl CartStore {
    /// Load the cart from storage and render it.
    ///
    /// Missing, unreadable or corrupt stored data yields an empty cart.
    pub fn open(storage: Arc<dyn KeyValueStorage>, renderer: Arc<dyn CartRenderer>) -> Self {
        let cart = load_cart(storage.as_ref());
        debug!(lines = cart.len(), count = cart.count(), "Cart loaded");

        let store = Self {
            storage,
            renderer,
            cart,
            removal: RemovalState::Idle,
        };
        store.renderer.render(&store.cart.summary());
        store
    }

    /// Add a product, resolving its fields first.
    ///
    /// Logs and leaves the cart untouched when a required field is missing
    /// (empty id or name, no price, negative price) or `quantity_delta` is 0.
    /// Returns whether the cart changed.
    pub fn add_item(
        &mut self,
        product_id: impl Into<ProductId>,
        name: &str,
        unit_price: Option<Price>,
        image_url: &str,
        quantity_delta: u32,
    ) -> bool {
        let product_id = product_id.into();
        let resolved = unit_price
            .ok_or(DomainError::MissingField { field: "price" })
            .and_then(|price| ItemDetails::try_new(product_id.clone(), name, price, image_url));

        match resolved {
            Ok(details) => self.add_details(&details, quantity_delta),
            Err(error) => {
                warn!(
                    product_id = %product_id,
                    error = %error,
                    "Product details unresolved, not added"
                );
                false
            }
        }
    }

    /// Add already-resolved product details. Returns whether the cart changed.
    pub fn add_details(&mut self, details: &ItemDetails, quantity_delta: u32) -> bool {
        match self.cart.add(details, quantity_delta) {
            Ok(quantity) => {
                info!(product_id = %details.id(), quantity, "Added to cart");
                self.clear_pending_for(details.id());
                self.commit();
                true
            }
            Err(error) => {
                warn!(product_id = %details.id(), error = %error, "Product not added");
                false
            }
        }
    }

    /// Remove a product's line item. Absent ids are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<CartLineItem> {
        let removed = self.cart.remove(product_id);
        if removed.is_some() {
            info!(product_id = %product_id, "Removed from cart");
        } else {
            debug!(product_id = %product_id, "Remove ignored, product not in cart");
        }
        self.clear_pending_for(product_id);
        self.commit();
        removed
    }

    /// Adjust the quantity of the line at `index` by `delta`.
    ///
    /// A result of zero or less is not applied; the line is recorded as
    /// pending removal and [`QuantityChange::ConfirmationRequired`] returned.
    /// A later request for another line replaces the pending one.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> QuantityChange {
        let Some(item) = self.cart.get(index) else {
            warn!(index, lines = self.cart.len(), "Quantity change for missing cart line");
            return QuantityChange::OutOfRange { index };
        };

        let requested = i64::from(item.quantity).saturating_add(delta);
        let product_id = item.id.clone();

        if requested <= 0 {
            let name = item.name.clone();
            if let Some(previous) = self.removal.pending_id() {
                if previous != &product_id {
                    debug!(
                        previous = %previous,
                        product_id = %product_id,
                        "Replacing pending removal"
                    );
                }
            }
            info!(product_id = %product_id, "Removal awaiting confirmation");
            self.removal = RemovalState::AwaitingConfirmation {
                product_id: product_id.clone(),
                name: name.clone(),
            };
            return QuantityChange::ConfirmationRequired { product_id, name };
        }

        let quantity = u32::try_from(requested).unwrap_or(u32::MAX);
        self.cart.set_quantity(index, quantity);
        self.clear_pending_for(&product_id);
        self.commit();

        QuantityChange::Applied {
            product_id,
            quantity,
        }
    }

    /// Resolve a pending removal.
    ///
    /// When `confirmed`, removes the pending line (if it is still in the
    /// cart) and returns it. The state is always back to idle afterwards.
    pub fn confirm_pending_removal(&mut self, confirmed: bool) -> Option<CartLineItem> {
        let RemovalState::AwaitingConfirmation { product_id, .. } =
            std::mem::take(&mut self.removal)
        else {
            debug!("No removal pending");
            return None;
        };

        if !confirmed {
            info!(product_id = %product_id, "Removal cancelled");
            return None;
        }

        let removed = self.cart.remove(&product_id);
        match &removed {
            Some(_) => {
                info!(product_id = %product_id, "Removal confirmed");
                self.commit();
            }
            None => warn!(product_id = %product_id, "Pending item no longer in cart"),
        }
        removed
    }

    /// Dismiss a pending removal without applying it.
    pub fn cancel_pending_removal(&mut self) {
        self.confirm_pending_removal(false);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.removal = RemovalState::Idle;
        info!("Cart cleared");
        self.commit();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    /// Cart total rounded to two decimals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    #[must_use]
    pub const fn removal_state(&self) -> &RemovalState {
        &self.removal
    }

    fn clear_pending_for(&mut self, product_id: &ProductId) {
        if self.removal.is_pending_for(product_id) {
            debug!(product_id = %product_id, "Pending removal superseded");
            self.removal = RemovalState::Idle;
        }
    }

    /// Persist the whole cart and re-render it.
    fn commit(&self) {
        match serde_json::to_string(self.cart.items()) {
            Ok(raw) => {
                if let Err(error) = self.storage.set(CART_STORAGE_KEY, &raw) {
                    warn!(error = %error, "Failed to persist cart");
                }
            }
            Err(error) => warn!(error = %error, "Failed to serialize cart"),
        }
        self.renderer.render(&self.cart.summary());
    }
}

fn load_cart(storage: &dyn KeyValueStorage) -> Cart {
    let raw = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(error) => {
            warn!(error = %error, "Failed to read stored cart, starting empty");
            return Cart::new();
        }
    };

    match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
        Ok(records) => Cart::from_records(records),
        Err(error) => {
            warn!(error = %error, "Stored cart is corrupt, starting empty");
            Cart::new()
        }
    }
}
