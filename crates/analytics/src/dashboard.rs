use crate::customers::{CustomerSummary, summarize_customers};
use crate::engine::{AnalyticsEngine, AnalyticsOptions, total_orders};
use crate::error::AnalyticsError;
use crate::inventory::{DEFAULT_LOW_STOCK_THRESHOLD, InventorySummary, summarize_inventory};
use crate::report::{DateSeries, ProductSummary, SalesAnalytics};
use crate::repository::SalesRepository;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardOptions {
    pub analytics: AnalyticsOptions,
    /// Number of most recent date labels charted.
    pub chart_window: usize,
    /// Number of top products highlighted on the dashboard.
    pub top_products_shown: usize,
    pub low_stock_threshold: i64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            analytics: AnalyticsOptions::default(),
            chart_window: 7,
            top_products_shown: 3,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Everything the dashboard shows for one account, computed at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub account_id: String,
    pub generated_on: NaiveDate,
    pub sales: SalesAnalytics,
    /// The tail of `sales.sales_by_date` that is charted.
    pub chart: DateSeries,
    /// The head of `sales.top_products` that is highlighted.
    pub highlighted_products: Vec<ProductSummary>,
    pub total_orders: usize,
    pub today_sales: Decimal,
    pub inventory: InventorySummary,
    pub customers: CustomerSummary,
}

/// Fetches an account's records and assembles its dashboard.
pub struct DashboardService<R> {
    repository: R,
    engine: AnalyticsEngine,
    options: DashboardOptions,
}

impl<R: SalesRepository> DashboardService<R> {
    pub fn new(repository: R, options: DashboardOptions) -> Self {
        Self {
            repository,
            engine: AnalyticsEngine::new(options.analytics),
            options,
        }
    }

    /// Fetches the account's sales and computes only the sales report.
    pub async fn sales_analytics(&self, account_id: &str) -> Result<SalesAnalytics, AnalyticsError> {
        let sales = self.repository.fetch_sales(account_id).await?;
        Ok(self.engine.calculate(&sales))
    }

    /// Builds the full dashboard as of `today`.
    ///
    /// The three collections are fetched concurrently; the first failure aborts
    /// the build and is returned.
    pub async fn build(
        &self,
        account_id: &str,
        today: NaiveDate,
    ) -> Result<DashboardSummary, AnalyticsError> {
        if self.options.chart_window == 0 {
            return Err(AnalyticsError::InvalidOption(
                "chart_window must be at least 1".to_string(),
            ));
        }

        let (sales, products, customers) = tokio::try_join!(
            self.repository.fetch_sales(account_id),
            self.repository.fetch_products(account_id),
            self.repository.fetch_customers(account_id),
        )?;

        tracing::info!(
            account_id,
            sales = sales.len(),
            products = products.len(),
            customers = customers.len(),
            "Fetched dashboard records."
        );

        let report = self.engine.calculate(&sales);
        let chart = report.sales_by_date.recent(self.options.chart_window);
        let highlighted_products = report
            .top_products
            .iter()
            .take(self.options.top_products_shown)
            .cloned()
            .collect();

        Ok(DashboardSummary {
            account_id: account_id.to_string(),
            generated_on: today,
            chart,
            highlighted_products,
            total_orders: total_orders(&sales),
            today_sales: self.engine.sales_on(&sales, today),
            inventory: summarize_inventory(&products, self.options.low_stock_threshold),
            customers: summarize_customers(&customers, today, self.options.analytics.utc_offset),
            sales: report,
        })
    }
}
