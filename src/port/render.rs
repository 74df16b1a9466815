//! Presentation port for cart changes.

use tracing::debug;

use crate::domain::CartSummary;

/// Receives the recomputed cart summary after every cart change.
pub trait CartRenderer: Send + Sync {
    /// Render the summary.
    ///
    /// This method should return quickly and must not mutate the cart.
    fn render(&self, summary: &CartSummary);
}

/// A renderer that discards updates.
pub struct NullRenderer;

impl CartRenderer for NullRenderer {
    fn render(&self, _summary: &CartSummary) {}
}

/// A renderer that logs the badge count and total via tracing.
pub struct LogRenderer;

impl CartRenderer for LogRenderer {
    fn render(&self, summary: &CartSummary) {
        debug!(
            lines = summary.items.len(),
            count = summary.count,
            total = %summary.total,
            "Cart updated"
        );
    }
}
