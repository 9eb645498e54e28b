use crate::error::ConfigError;
use crate::settings::Config;
use clap::Args;
use core_types::DateLabelFormat;

/// Command-line flags that take precedence over the file and environment.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// How many products to rank by revenue.
    #[arg(long)]
    pub top_products: Option<usize>,

    /// How to label dates in the sales series.
    #[arg(long, value_enum)]
    pub date_format: Option<DateLabelFormat>,

    /// The account's offset from UTC, in minutes.
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset_minutes: Option<i32>,

    /// How many recent dates to chart.
    #[arg(long)]
    pub chart_window: Option<usize>,

    /// Flag products with this many units or fewer.
    #[arg(long)]
    pub low_stock_threshold: Option<i64>,
}

impl ConfigOverrides {
    /// Applies every flag that was given and re-validates the result.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(limit) = self.top_products {
            config.analytics.top_products_limit = limit;
        }
        if let Some(format) = self.date_format {
            config.analytics.date_label_format = format;
        }
        if let Some(minutes) = self.utc_offset_minutes {
            config.analytics.utc_offset_minutes = minutes;
        }
        if let Some(window) = self.chart_window {
            config.dashboard.chart_window = window;
        }
        if let Some(threshold) = self.low_stock_threshold {
            config.inventory.low_stock_threshold = threshold;
        }
        config.validate()
    }
}
