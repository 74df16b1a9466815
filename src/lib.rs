//! Cartcompare - a persisted grocery cart with a two-retailer price comparison.
//!
//! The cart lives in key-value storage and is rewritten after every change.
//! A comparison fetches both retailers' price lists and ranks them by what
//! the current cart would cost at each, cheapest first. Products come from
//! the storefront's XML feed, cached and searchable.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Cart, catalogs, comparison ranking, products and paging
//! - [`port`] - Traits for storage, catalog sources, rendering and search
//! - [`application`] - Cart store, comparison engine, listing and live search
//! - [`adapter`] - CLI on the inbound side; HTTP and file storage outbound
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cartcompare::adapter::outbound::storage::MemoryStorage;
//! use cartcompare::application::CartStore;
//! use cartcompare::port::NullRenderer;
//! use rust_decimal_macros::dec;
//!
//! let mut cart = CartStore::open(Arc::new(MemoryStorage::new()), Arc::new(NullRenderer));
//! cart.add_item("p1", "Letmælk", Some(dec!(12.95)), "", 2);
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total(), dec!(25.90));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
