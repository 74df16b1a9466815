//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where adapters plug in external systems: browser-
//! style key-value storage, the retailer catalog endpoint, the product feed
//! and the presentation layer.
//!
//! # Available Ports
//!
//! - [`KeyValueStorage`] - Persistence boundary of the cart
//! - [`CatalogFetcher`], [`ProductSource`] - Network data sources
//! - [`CartRenderer`] - Presentation of cart changes
//! - [`SearchBackend`] - Product search used by live search

mod catalog;
mod render;
mod search;
mod storage;

pub use catalog::{CatalogFetcher, ProductSource};
pub use render::{CartRenderer, LogRenderer, NullRenderer};
pub use search::SearchBackend;
pub use storage::KeyValueStorage;
