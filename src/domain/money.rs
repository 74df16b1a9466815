//! Monetary types for price representation.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Round an amount to two decimal places for display and ranking.
///
/// Midpoints round away from zero and the result always carries a scale
/// of two, so `10` renders as `10.00`.
#[must_use]
pub fn round_display(amount: Price) -> Price {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Parse a feed price such as `"12,95 DKK"`, `"12.95 kr"` or `"7"`.
///
/// Returns `None` for empty or non-numeric input.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Price> {
    let cleaned = raw.replace("DKK", "").replace("kr", "").replace(',', ".");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}
