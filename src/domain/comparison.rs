//! Pricing a cart against retailer catalogs.

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart::CartLineItem;
use super::catalog::RetailerCatalog;
use super::money::{round_display, Price};

/// A retailer's total for the current cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub retailer_name: String,
    /// Total rounded to two decimals.
    pub total_price: Price,
}

impl ComparisonResult {
    pub fn new(retailer_name: impl Into<String>, total_price: Price) -> Self {
        Self {
            retailer_name: retailer_name.into(),
            total_price: round_display(total_price),
        }
    }
}

/// Total the cart at each retailer and rank them.
///
/// Items a retailer does not stock contribute nothing to its total, so a
/// retailer missing part of the cart would otherwise look cheaper than one
/// pricing all of it. Retailers stocking every line rank first; within each
/// group totals ascend. The sort is stable, so equal keys keep the catalog
/// order.
#[must_use]
pub fn rank_retailers(
    items: &[CartLineItem],
    catalogs: &[RetailerCatalog],
) -> Vec<ComparisonResult> {
    let mut ranked: Vec<(bool, ComparisonResult)> = catalogs
        .iter()
        .map(|catalog| {
            let mut incomplete = false;
            let total: Price = items
                .iter()
                .filter_map(|item| {
                    let entry = catalog.get(&item.id);
                    incomplete |= entry.is_none();
                    entry.map(|entry| entry.effective_price() * Decimal::from(item.quantity))
                })
                .sum();
            (incomplete, ComparisonResult::new(catalog.name(), total))
        })
        .collect();

    ranked.sort_by(|(a_incomplete, a), (b_incomplete, b)| {
        a_incomplete
            .cmp(b_incomplete)
            .then_with(|| a.total_price.cmp(&b.total_price))
    });
    ranked.into_iter().map(|(_, result)| result).collect()
}

/// One zero-priced row per retailer, in declared order.
#[must_use]
pub fn zero_results<S: AsRef<str>>(retailers: &[S]) -> Vec<ComparisonResult> {
    retailers
        .iter()
        .map(|name| ComparisonResult::new(name.as_ref(), Decimal::ZERO))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogEntry;
    use crate::domain::id::ProductId;
    use rust_decimal_macros::dec;

    fn item(id: &str, price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ProductId::new(id),
            name: id.to_string(),
            unit_price: price,
            image_url: String::new(),
            quantity,
        }
    }

    #[test]
    fn absent_product_contributes_zero() {
        let a = RetailerCatalog::from_entries("A", [CatalogEntry::new("p1", dec!(10), None)]);
        let b = RetailerCatalog::new("B");

        let results = rank_retailers(&[item("p1", dec!(10), 1)], &[a, b]);

        assert_eq!(
            results,
            vec![
                ComparisonResult::new("A", dec!(10)),
                ComparisonResult::new("B", dec!(0)),
            ]
        );
        assert_eq!(results[0].total_price.to_string(), "10.00");
        assert_eq!(results[1].total_price.to_string(), "0.00");
    }

    #[test]
    fn cheaper_complete_basket_ranks_first() {
        let a = RetailerCatalog::from_entries(
            "A",
            [
                CatalogEntry::new("p1", dec!(10), None),
                CatalogEntry::new("p2", dec!(4), None),
            ],
        );
        let b = RetailerCatalog::from_entries(
            "B",
            [
                CatalogEntry::new("p1", dec!(8), None),
                CatalogEntry::new("p2", dec!(3), None),
            ],
        );
        let c = RetailerCatalog::from_entries("C", [CatalogEntry::new("p1", dec!(1), None)]);

        let results = rank_retailers(&[item("p1", dec!(0), 1), item("p2", dec!(0), 1)], &[a, b, c]);

        let names: Vec<&str> = results.iter().map(|r| r.retailer_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn empty_cart_keeps_declared_order() {
        let a = RetailerCatalog::new("A");
        let b = RetailerCatalog::new("B");

        let results = rank_retailers(&[], &[a, b]);

        assert_eq!(results, zero_results(&["A", "B"]));
    }

    #[test]
    fn sale_price_is_multiplied_by_quantity() {
        let a = RetailerCatalog::from_entries(
            "A",
            [CatalogEntry::new("p1", dec!(20), Some(dec!(15)))],
        );
        let b = RetailerCatalog::from_entries("B", [CatalogEntry::new("p1", dec!(16), None)]);

        let results = rank_retailers(&[item("p1", dec!(20), 2)], &[a, b]);

        assert_eq!(results[0], ComparisonResult::new("A", dec!(30)));
        assert_eq!(results[1], ComparisonResult::new("B", dec!(32)));
        assert_eq!(results[0].total_price.to_string(), "30.00");
    }

    #[test]
    fn ties_keep_declared_order() {
        let a = RetailerCatalog::from_entries("A", [CatalogEntry::new("p1", dec!(5), None)]);
        let b = RetailerCatalog::from_entries("B", [CatalogEntry::new("p1", dec!(5), None)]);

        let results = rank_retailers(&[item("p1", dec!(5), 1)], &[a, b]);

        assert_eq!(results[0].retailer_name, "A");
        assert_eq!(results[1].retailer_name, "B");
    }

    #[test]
    fn totals_are_rounded_after_summing() {
        let a = RetailerCatalog::from_entries(
            "A",
            [
                CatalogEntry::new("p1", dec!(0.333), None),
                CatalogEntry::new("p2", dec!(0.333), None),
            ],
        );

        let results = rank_retailers(&[item("p1", dec!(0), 1), item("p2", dec!(0), 2)], &[a]);

        assert_eq!(results[0].total_price, dec!(1.00));
    }

    #[test]
    fn zero_results_follow_declared_order() {
        let results = zero_results(&["A", "B"]);
        assert_eq!(results[0], ComparisonResult::new("A", dec!(0)));
        assert_eq!(results[1].retailer_name, "B");
    }
}
