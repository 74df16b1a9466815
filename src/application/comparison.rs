//! Store comparison service.
//!
//! Prices the cart at every configured retailer from a freshly fetched
//! catalog. Fetch failures never reach the caller as errors: the result
//! degrades to zero-priced rows and carries the failure reason instead.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{rank_retailers, zero_results, CartLineItem, ComparisonResult};
use crate::error::ComparisonError;
use crate::port::CatalogFetcher;

/// Ranked comparison of the cart across retailers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Cheapest retailer first.
    pub results: Vec<ComparisonResult>,
    /// Why the catalog could not be used, when the results are degraded.
    pub failure: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl Comparison {
    /// True when the results are zero-valued because the fetch failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    #[must_use]
    pub fn cheapest(&self) -> Option<&ComparisonResult> {
        if self.is_degraded() {
            return None;
        }
        self.results.first()
    }
}

/// Compares cart totals across retailers, one comparison at a time.
pub struct ComparisonEngine {
    retailers: Vec<String>,
    busy: AtomicBool,
}

/// Clears the busy flag on every exit path.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ComparisonEngine {
    /// Create an engine for the given retailer names, in declared order.
    ///
    /// The names are used for the zero-priced rows of a failed comparison.
    pub fn new<S: Into<String>>(retailers: impl IntoIterator<Item = S>) -> Self {
        Self {
            retailers: retailers.into_iter().map(Into::into).collect(),
            busy: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn retailers(&self) -> &[String] {
        &self.retailers
    }

    /// Return true while a comparison is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Fetch catalogs and rank the retailers for `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InProgress`] if another comparison on this
    /// engine has not finished. Fetch failures are reported through
    /// [`Comparison::failure`] instead.
    pub async fn compare(
        &self,
        cart: &[CartLineItem],
        fetcher: &dyn CatalogFetcher,
    ) -> Result<Comparison, ComparisonError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Comparison requested while one is running");
            return Err(ComparisonError::InProgress);
        }
        let _guard = BusyGuard(&self.busy);

        let comparison = match fetcher.fetch_catalogs().await {
            Ok(snapshot) => {
                let results = rank_retailers(cart, snapshot.retailers());
                info!(
                    lines = cart.len(),
                    retailers = results.len(),
                    cheapest = results.first().map_or("-", |r| r.retailer_name.as_str()),
                    "Comparison completed"
                );
                Comparison {
                    results,
                    failure: None,
                    completed_at: Utc::now(),
                }
            }
            Err(error) => {
                warn!(error = %error, "Catalog fetch failed, reporting zero totals");
                Comparison {
                    results: zero_results(self.retailers.as_slice()),
                    failure: Some(error.to_string()),
                    completed_at: Utc::now(),
                }
            }
        };

        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogEntry, CatalogSnapshot, ProductId, RetailerCatalog};
    use crate::error::CatalogError;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tokio::sync::Notify;

    struct FixedFetcher(CatalogSnapshot);

    #[async_trait]
    impl CatalogFetcher for FixedFetcher {
        async fn fetch_catalogs(&self) -> Result<CatalogSnapshot, CatalogError> {
            Ok(self.0.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl CatalogFetcher for FailingFetcher {
        async fn fetch_catalogs(&self) -> Result<CatalogSnapshot, CatalogError> {
            Err(CatalogError::Unsuccessful)
        }
    }

    /// Blocks until released, then returns an empty snapshot.
    struct GatedFetcher(Notify);

    #[async_trait]
    impl CatalogFetcher for GatedFetcher {
        async fn fetch_catalogs(&self) -> Result<CatalogSnapshot, CatalogError> {
            self.0.notified().await;
            Ok(CatalogSnapshot::default())
        }
    }

    fn item(id: &str, price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ProductId::new(id),
            name: id.to_string(),
            unit_price: price,
            image_url: String::new(),
            quantity,
        }
    }

    fn engine() -> ComparisonEngine {
        ComparisonEngine::new(["Rema 1000", "Netto"])
    }

    #[tokio::test]
    async fn item_missing_at_one_retailer() {
        let fetcher = FixedFetcher(CatalogSnapshot::new(vec![
            RetailerCatalog::from_entries("Rema 1000", [CatalogEntry::new("p1", dec!(10), None)]),
            RetailerCatalog::new("Netto"),
        ]));

        let comparison = engine()
            .compare(&[item("p1", dec!(10), 1)], &fetcher)
            .await
            .unwrap();

        assert!(!comparison.is_degraded());
        assert_eq!(
            comparison.results,
            vec![
                ComparisonResult::new("Rema 1000", dec!(10.00)),
                ComparisonResult::new("Netto", dec!(0.00)),
            ]
        );
    }

    #[tokio::test]
    async fn sale_price_wins() {
        let fetcher = FixedFetcher(CatalogSnapshot::new(vec![
            RetailerCatalog::from_entries(
                "Rema 1000",
                [CatalogEntry::new("p1", dec!(20), Some(dec!(15)))],
            ),
            RetailerCatalog::from_entries("Netto", [CatalogEntry::new("p1", dec!(31), None)]),
        ]));

        let comparison = engine()
            .compare(&[item("p1", dec!(20), 2)], &fetcher)
            .await
            .unwrap();

        assert_eq!(comparison.cheapest().unwrap().retailer_name, "Rema 1000");
        assert_eq!(comparison.results[0].total_price, dec!(30.00));
        assert_eq!(comparison.results[1].total_price, dec!(62.00));
    }

    #[tokio::test]
    async fn sale_price_example_against_missing_retailer() {
        let fetcher = FixedFetcher(CatalogSnapshot::new(vec![
            RetailerCatalog::from_entries(
                "Rema 1000",
                [CatalogEntry::new("p1", dec!(20), Some(dec!(15)))],
            ),
            RetailerCatalog::new("Netto"),
        ]));

        let comparison = engine()
            .compare(&[item("p1", dec!(20), 2)], &fetcher)
            .await
            .unwrap();

        assert_eq!(
            comparison.results,
            vec![
                ComparisonResult::new("Rema 1000", dec!(30.00)),
                ComparisonResult::new("Netto", dec!(0.00)),
            ]
        );
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_zero_rows() {
        let engine = engine();
        let comparison = engine
            .compare(&[item("p1", dec!(20), 2)], &FailingFetcher)
            .await
            .unwrap();

        assert!(comparison.is_degraded());
        assert!(comparison.cheapest().is_none());
        assert_eq!(comparison.results, zero_results(&["Rema 1000", "Netto"]));
        assert!(!engine.is_busy());
    }

    #[tokio::test]
    async fn concurrent_compare_is_rejected() {
        let engine = engine();
        let gated = GatedFetcher(Notify::new());
        let cart = [item("p1", dec!(1), 1)];

        let (first, second) = tokio::join!(engine.compare(&cart, &gated), async {
            let second = engine.compare(&cart, &FailingFetcher).await;
            gated.0.notify_one();
            second
        });

        assert!(first.is_ok());
        assert_eq!(second, Err(ComparisonError::InProgress));
        assert!(!engine.is_busy());
    }
}
