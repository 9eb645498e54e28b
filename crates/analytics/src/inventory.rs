use crate::money::{add_amount, multiply_amount};
use core_types::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Products at or below this many units are flagged for restocking.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub name: String,
    pub quantity: i64,
}

/// The inventory cards of the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_products: usize,
    /// In inventory order, not sorted by quantity.
    pub low_stock: Vec<LowStockItem>,
    /// Sum of `price * quantity` over every product.
    pub total_value: Decimal,
}

/// Summarizes an account's products. A product with no recorded quantity
/// counts as out of stock, and therefore as low stock.
pub fn summarize_inventory(products: &[Product], low_stock_threshold: i64) -> InventorySummary {
    let mut summary = InventorySummary {
        total_products: products.len(),
        ..InventorySummary::default()
    };

    for product in products {
        let quantity = product.quantity();
        let value = multiply_amount(product.price(), quantity);
        summary.total_value = add_amount(summary.total_value, value);

        if quantity <= low_stock_threshold {
            summary.low_stock.push(LowStockItem {
                name: product.display_name().to_string(),
                quantity,
            });
        }
    }

    if !summary.low_stock.is_empty() {
        tracing::debug!(count = summary.low_stock.len(), "Products need restocking.");
    }

    summary
}
