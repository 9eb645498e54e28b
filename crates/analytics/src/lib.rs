//! # Tally Analytics
//!
//! Turns an account's raw sales, inventory and customer records into the
//! numbers a dashboard shows.
//!
//! ## Architectural Principles
//!
//! - **Pure Calculation:** `AnalyticsEngine` is a stateless calculator over an
//!   already-fetched slice of records. It performs no I/O, holds no caches and
//!   never fails on malformed data; bad fields are coerced by `core-types`.
//! - **Narrow Collaborator:** Fetching goes through the `SalesRepository` trait.
//!   `DashboardService` is the only code here that awaits anything.
//!
//! ## Public API
//!
//! - `compute_analytics` / `AnalyticsEngine`: sales totals, sales by date and top products.
//! - `summarize_inventory`, `summarize_customers`: the other dashboard cards.
//! - `DashboardService`: fetches everything for one account and assembles a `DashboardSummary`.

// Declare the modules that constitute this crate.
pub mod customers;
pub mod dashboard;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod money;
pub mod report;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use customers::{CustomerSummary, summarize_customers};
pub use dashboard::{DashboardOptions, DashboardService, DashboardSummary};
pub use engine::{AnalyticsEngine, AnalyticsOptions, DEFAULT_TOP_PRODUCTS, compute_analytics, total_orders};
pub use error::{AnalyticsError, RepositoryError};
pub use inventory::{DEFAULT_LOW_STOCK_THRESHOLD, InventorySummary, LowStockItem, summarize_inventory};
pub use report::{DateSeries, ProductSummary, SalesAnalytics};
pub use repository::{InMemoryRepository, SalesRepository, Snapshot};
