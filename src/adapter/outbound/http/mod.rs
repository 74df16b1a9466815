//! HTTP adapters for the retailer catalog and the product feed.

mod catalog;
mod client;
mod dto;
mod feed;

pub use catalog::HttpCatalogFetcher;
pub use client::HttpClient;
pub use feed::{parse_feed, HttpProductFeed};
