//! Application services built on the domain and ports.
//!
//! - [`cart`] - Persisted cart store with removal confirmation
//! - [`comparison`] - Cross-retailer cart pricing
//! - [`listing`] - Cached product feed with search and browse queries
//! - [`search`] - Debounced live search driver

pub mod cart;
pub mod comparison;
pub mod listing;
pub mod search;

pub use cart::{CartStore, QuantityChange, CART_STORAGE_KEY};
pub use comparison::{Comparison, ComparisonEngine};
pub use listing::{FeaturedSection, ProductListing};
pub use search::{LiveSearch, SearchOutcome};
