//! Terminal rendering of the cart.

use parking_lot::Mutex;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::{round_display, CartLineItem, CartSummary};
use crate::port::{CartRenderer, LogRenderer};

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Unit")]
    unit_price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Total")]
    line_total: String,
}

impl CartRow {
    fn new(position: usize, item: &CartLineItem) -> Self {
        Self {
            position,
            name: item.name.clone(),
            id: item.id.to_string(),
            unit_price: format!("{:.2}", round_display(item.unit_price)),
            quantity: item.quantity,
            line_total: format!("{:.2}", round_display(item.line_total())),
        }
    }
}

/// Keeps the latest cart summary so a command prints it once at the end.
#[derive(Default)]
pub struct TerminalCartRenderer {
    latest: Mutex<Option<CartSummary>>,
}

impl TerminalCartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary of the most recent change, if any was rendered.
    #[must_use]
    pub fn latest(&self) -> Option<CartSummary> {
        self.latest.lock().clone()
    }

    /// Print the most recent summary.
    pub fn flush(&self) {
        if let Some(summary) = self.latest() {
            print_summary(&summary);
        }
    }
}

impl CartRenderer for TerminalCartRenderer {
    fn render(&self, summary: &CartSummary) {
        LogRenderer.render(summary);
        *self.latest.lock() = Some(summary.clone());
    }
}

/// Print the cart as a table followed by the badge count and total.
pub fn print_summary(summary: &CartSummary) {
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "cart",
            "items": summary.items,
            "count": summary.count,
            "total": summary.total,
        }));
        return;
    }

    output::section("Cart");
    if summary.items.is_empty() {
        output::note("The cart is empty");
    } else {
        let rows: Vec<CartRow> = summary
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow::new(index + 1, item))
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    println!();
    output::field("Items", summary.count);
    output::field("Total", output::positive(format!("{:.2}", summary.total)));
}
