use crate::error::ConfigError;
use analytics::{AnalyticsOptions, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_TOP_PRODUCTS, DashboardOptions};
use chrono::FixedOffset;
use core_types::DateLabelFormat;
use serde::Deserialize;

/// Offsets beyond ±18 hours do not exist and chrono refuses them.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing keys take the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analytics: AnalyticsSettings,
    pub dashboard: DashboardSettings,
    pub inventory: InventorySettings,
}

/// Controls how the sales report is calculated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// How many products are ranked by revenue.
    pub top_products_limit: usize,
    /// How date labels in the sales-by-date series are written.
    pub date_label_format: DateLabelFormat,
    /// The account's offset from UTC in minutes (e.g. 60 for UTC+1).
    pub utc_offset_minutes: i32,
}

/// Controls what the dashboard shows from the report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Number of most recent dates charted.
    pub chart_window: usize,
    /// Number of top products listed.
    pub top_products_shown: usize,
    /// Prefix used when printing amounts.
    pub currency_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    /// Products with this many units or fewer are flagged.
    pub low_stock_threshold: i64,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS,
            date_label_format: DateLabelFormat::default(),
            utc_offset_minutes: 0,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            chart_window: 7,
            top_products_shown: 3,
            currency_symbol: "₵".to_string(),
        }
    }
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    /// Rejects values the calculation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.top_products_limit == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.top_products_limit must be at least 1".to_string(),
            ));
        }
        let offsets = -MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES;
        if !offsets.contains(&self.analytics.utc_offset_minutes) {
            return Err(ConfigError::ValidationError(format!(
                "analytics.utc_offset_minutes must be within ±{}, got {}",
                MAX_UTC_OFFSET_MINUTES, self.analytics.utc_offset_minutes
            )));
        }
        if self.dashboard.chart_window == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.chart_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        let minutes = self.analytics.utc_offset_minutes;
        minutes.checked_mul(60).and_then(FixedOffset::east_opt).ok_or_else(|| {
            ConfigError::ValidationError(format!("invalid UTC offset of {} minutes", minutes))
        })
    }

    pub fn analytics_options(&self) -> Result<AnalyticsOptions, ConfigError> {
        Ok(AnalyticsOptions {
            top_products_limit: self.analytics.top_products_limit,
            date_format: self.analytics.date_label_format,
            utc_offset: self.utc_offset()?,
        })
    }

    pub fn dashboard_options(&self) -> Result<DashboardOptions, ConfigError> {
        Ok(DashboardOptions {
            analytics: self.analytics_options()?,
            chart_window: self.dashboard.chart_window,
            top_products_shown: self.dashboard.top_products_shown,
            low_stock_threshold: self.inventory.low_stock_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let options = config.dashboard_options().unwrap();
        assert_eq!(options, DashboardOptions::default());
    }

    #[test]
    fn rejects_zero_limit() {
        let mut config = Config::default();
        config.analytics.top_products_limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn rejects_impossible_offsets() {
        let mut config = Config::default();
        config.analytics.utc_offset_minutes = 19 * 60;
        assert!(config.validate().is_err());
        assert!(config.utc_offset().is_err());

        for extreme in [i32::MIN, i32::MAX] {
            config.analytics.utc_offset_minutes = extreme;
            assert!(config.validate().is_err());
            assert!(config.utc_offset().is_err());
        }
    }

    #[test]
    fn offset_is_in_minutes() {
        let mut config = Config::default();
        config.analytics.utc_offset_minutes = -300;
        assert_eq!(config.utc_offset().unwrap(), FixedOffset::west_opt(5 * 3600).unwrap());
    }
}
