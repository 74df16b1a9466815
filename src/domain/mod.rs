//! Retailer-agnostic domain logic: cart, catalogs, comparison and listings.

mod cart;
mod catalog;
mod comparison;
mod id;
mod money;
mod page;
mod product;
mod removal;

pub mod category;
pub mod error;

// Cart
pub use cart::{Cart, CartLineItem, CartSummary, ItemDetails};
pub use removal::RemovalState;

// Catalogs and comparison
pub use catalog::{CatalogEntry, CatalogSnapshot, RetailerCatalog};
pub use comparison::{rank_retailers, zero_results, ComparisonResult};

// Listing
pub use page::Page;
pub use product::{search_terms, Product};

// Core value types
pub use id::ProductId;
pub use money::{parse_price, round_display, Price};
