use crate::money::{add_amount, sum_amounts};
use crate::report::{DateSeries, ProductSummary, SalesAnalytics};
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use core_types::{DateLabelFormat, NormalizedSale, Sale, UNKNOWN_LABEL};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// How many products the sales report ranks by default.
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// Per-account presentation choices that affect the calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsOptions {
    pub top_products_limit: usize,
    pub date_format: DateLabelFormat,
    /// The account's offset from UTC, used to place zoned timestamps on a calendar day.
    pub utc_offset: FixedOffset,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS,
            date_format: DateLabelFormat::default(),
            utc_offset: Utc.fix(),
        }
    }
}

/// A stateless calculator for deriving sales metrics from an account's sale records.
#[derive(Debug, Default, Clone)]
pub struct AnalyticsEngine {
    options: AnalyticsOptions,
}

/// Computes the sales report with the default options: top 5 products,
/// `1/1/2024` date labels, dates in UTC.
pub fn compute_analytics(sales: &[Sale]) -> SalesAnalytics {
    AnalyticsEngine::default().calculate(sales)
}

impl AnalyticsEngine {
    pub fn new(options: AnalyticsOptions) -> Self {
        Self { options }
    }

    /// The main entry point for calculating the sales report.
    ///
    /// # Arguments
    ///
    /// * `sales` - Every sale of one account, in any order. Scoping to the
    ///   account is the repository's job.
    ///
    /// # Returns
    ///
    /// The `SalesAnalytics` report. Malformed records are coerced rather than
    /// rejected, so this never fails; an empty slice yields an empty report.
    pub fn calculate(&self, sales: &[Sale]) -> SalesAnalytics {
        let mut report = SalesAnalytics::new();

        if sales.is_empty() {
            return report;
        }

        let normalized = self.normalize(sales);

        self.calculate_total(&normalized, &mut report);
        self.calculate_sales_by_date(&normalized, &mut report);
        self.calculate_top_products(&normalized, &mut report);

        tracing::debug!(
            records = sales.len(),
            dates = report.sales_by_date.len(),
            products = report.top_products.len(),
            "Calculated sales analytics."
        );

        report
    }

    /// Revenue of the sales that fell on `date` in the account's offset.
    pub fn sales_on(&self, sales: &[Sale], date: NaiveDate) -> Decimal {
        sum_amounts(
            self.normalize(sales)
                .iter()
                .filter(|sale| sale.date == Some(date))
                .map(|sale| sale.total_amount),
        )
    }

    fn normalize(&self, sales: &[Sale]) -> Vec<NormalizedSale> {
        sales
            .iter()
            .map(|sale| sale.normalize(self.options.utc_offset))
            .collect()
    }

    fn calculate_total(&self, sales: &[NormalizedSale], report: &mut SalesAnalytics) {
        report.total_sales = sum_amounts(sales.iter().map(|sale| sale.total_amount));
    }

    /// Groups revenue under a formatted date label, in first-seen order.
    fn calculate_sales_by_date(&self, sales: &[NormalizedSale], report: &mut SalesAnalytics) {
        let mut series = DateSeries::new();

        for sale in sales {
            let label = match sale.date {
                Some(date) => self.options.date_format.label(date),
                None => UNKNOWN_LABEL.to_string(),
            };
            series.add(&label, sale.total_amount);
        }

        report.sales_by_date = series;
    }

    /// Ranks products by summed revenue. Ties keep first-seen order.
    fn calculate_top_products(&self, sales: &[NormalizedSale], report: &mut SalesAnalytics) {
        let mut by_product: IndexMap<&str, ProductSummary> = IndexMap::new();

        for sale in sales {
            let entry = by_product
                .entry(sale.product_name.as_str())
                .or_insert_with(|| ProductSummary {
                    product_name: sale.product_name.clone(),
                    quantity_sold: 0,
                    total_revenue: Decimal::ZERO,
                });
            entry.quantity_sold = entry.quantity_sold.saturating_add(sale.quantity_sold);
            entry.total_revenue = add_amount(entry.total_revenue, sale.total_amount);
        }

        let mut ranked: Vec<ProductSummary> = by_product.into_values().collect();
        // `sort_by` is stable, which is what keeps tied products in first-seen order.
        ranked.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        ranked.truncate(self.options.top_products_limit);

        report.top_products = ranked;
    }
}

/// Number of sale records, i.e. orders placed.
pub fn total_orders(sales: &[Sale]) -> usize {
    sales.len()
}
