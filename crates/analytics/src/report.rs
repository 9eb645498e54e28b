use crate::money::{add_amount, sum_amounts};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue per date label, in the order each label was first seen.
///
/// The series is deliberately not sorted by date or value: callers chart the
/// tail of it (see [`DateSeries::recent`]) exactly as the records arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateSeries(IndexMap<String, Decimal>);

impl DateSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `label`, appending the label if it is new.
    pub fn add(&mut self, label: &str, amount: Decimal) {
        match self.0.get_mut(label) {
            Some(total) => *total = add_amount(*total, amount),
            None => {
                self.0.insert(label.to_string(), amount);
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.0.iter().map(|(label, amount)| (label.as_str(), *amount))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn total(&self) -> Decimal {
        sum_amounts(self.0.values().copied())
    }

    /// The last `n` labels in insertion order, the window a chart shows.
    pub fn recent(&self, n: usize) -> DateSeries {
        let skip = self.0.len().saturating_sub(n);
        DateSeries(
            self.0
                .iter()
                .skip(skip)
                .map(|(label, amount)| (label.clone(), *amount))
                .collect(),
        )
    }
}

/// Sales of one product name, summed across all of its sale records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_name: String,
    pub quantity_sold: i64,
    /// Summed stored `total_amount`, not recomputed from price and quantity.
    pub total_revenue: Decimal,
}

/// The sales section of the dashboard for one account.
///
/// Recomputed from scratch on every call; it has no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesAnalytics {
    pub total_sales: Decimal,
    pub sales_by_date: DateSeries,
    /// At most `top_products_limit` entries, highest revenue first.
    pub top_products: Vec<ProductSummary>,
}

impl SalesAnalytics {
    /// Creates the report for an account with no sales.
    pub fn new() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            sales_by_date: DateSeries::new(),
            top_products: Vec::new(),
        }
    }
}

impl Default for SalesAnalytics {
    fn default() -> Self {
        Self::new()
    }
}
