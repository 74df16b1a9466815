//! Product listing service over the cached storefront feed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::category::{category_for_slug, OVERVIEW_CATEGORIES, SALE_SECTION};
use crate::domain::{search_terms, ItemDetails, Page, Product, ProductId};
use crate::error::Result;
use crate::port::{ProductSource, SearchBackend};

/// Products per page (a 6x10 grid).
pub const DEFAULT_PAGE_SIZE: usize = 60;

/// How long a fetched feed is reused.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Products shown per section on the overview.
pub const FEATURED_PER_CATEGORY: usize = 6;

/// A named group of products on the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedSection {
    pub name: String,
    pub products: Vec<Product>,
}

struct CachedProducts {
    fetched_at: Instant,
    products: Arc<Vec<Product>>,
}

/// Cached view of the product feed with search and browse queries.
pub struct ProductListing {
    source: Arc<dyn ProductSource>,
    cache_ttl: Duration,
    page_size: usize,
    cache: Mutex<Option<CachedProducts>>,
}

impl ProductListing {
    pub fn new(source: Arc<dyn ProductSource>, cache_ttl: Duration, page_size: usize) -> Self {
        Self {
            source,
            cache_ttl,
            page_size: page_size.max(1),
            cache: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current product list, refetched once the cache has expired.
    ///
    /// A failed fetch is logged and cached as an empty list so the feed is
    /// not hammered while it is down.
    pub async fn products(&self) -> Arc<Vec<Product>> {
        let mut cache = self.cache.lock().await;

        if let Some(cached) = cache.as_ref() {
            if cached.fetched_at.elapsed() < self.cache_ttl {
                debug!(count = cached.products.len(), "Using cached products");
                return Arc::clone(&cached.products);
            }
        }

        let products = match self.source.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Fetched product feed");
                products
            }
            Err(error) => {
                warn!(error = %error, "Product feed unavailable");
                Vec::new()
            }
        };

        let products = Arc::new(products);
        *cache = Some(CachedProducts {
            fetched_at: Instant::now(),
            products: Arc::clone(&products),
        });
        products
    }

    /// Drop the cached feed so the next query refetches it.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
    }

    /// Products whose title or brand contains every query term.
    pub async fn search(&self, query: &str, page: usize) -> Page<Product> {
        let terms = search_terms(query);
        let products = self.products().await;
        let matches: Vec<Product> = products
            .iter()
            .filter(|product| product.matches_terms(&terms))
            .cloned()
            .collect();

        debug!(query, matches = matches.len(), "Search evaluated");
        Page::paginate(matches, page, self.page_size)
    }

    /// Products currently on sale.
    pub async fn sale(&self, page: usize) -> Page<Product> {
        let products = self.products().await;
        let on_sale: Vec<Product> = products.iter().filter(|p| p.is_sale()).cloned().collect();
        Page::paginate(on_sale, page, self.page_size)
    }

    /// Products of the category behind `slug`, with the category name.
    ///
    /// Returns `None` for an unknown slug.
    pub async fn category(&self, slug: &str, page: usize) -> Option<(&'static str, Page<Product>)> {
        let name = category_for_slug(slug)?;
        let products = self.products().await;
        let members: Vec<Product> = products
            .iter()
            .filter(|product| product.product_type == name)
            .cloned()
            .collect();
        Some((name, Page::paginate(members, page, self.page_size)))
    }

    /// Overview: the sale section followed by every non-empty category,
    /// each trimmed to `per_category` products.
    pub async fn featured(&self, per_category: usize) -> Vec<FeaturedSection> {
        let products = self.products().await;

        let sale = FeaturedSection {
            name: SALE_SECTION.to_string(),
            products: products
                .iter()
                .filter(|p| p.is_sale())
                .take(per_category)
                .cloned()
                .collect(),
        };

        let categories = OVERVIEW_CATEGORIES.iter().map(|name| FeaturedSection {
            name: (*name).to_string(),
            products: products
                .iter()
                .filter(|p| p.product_type == *name)
                .take(per_category)
                .cloned()
                .collect(),
        });

        std::iter::once(sale)
            .chain(categories)
            .filter(|section| !section.products.is_empty())
            .collect()
    }

    /// Product detail lookup.
    pub async fn find(&self, id: &ProductId) -> Option<Product> {
        self.products()
            .await
            .iter()
            .find(|product| &product.id == id)
            .cloned()
    }

    /// Resolve a product into cart details at its effective price.
    pub async fn item_details(&self, id: &ProductId) -> Option<ItemDetails> {
        let Some(product) = self.find(id).await else {
            warn!(product_id = %id, "Product not found");
            return None;
        };
        match product.item_details() {
            Ok(details) => Some(details),
            Err(error) => {
                warn!(product_id = %id, error = %error, "Product cannot be added to cart");
                None
            }
        }
    }
}

#[async_trait]
impl SearchBackend for ProductListing {
    async fn search(&self, query: &str, page: usize) -> Result<Page<Product>> {
        Ok(ProductListing::search(self, query, page).await)
    }
}
