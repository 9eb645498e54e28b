use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
#[cfg(feature = "clap")]
pub mod overrides;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use overrides::ConfigOverrides;
pub use settings::{AnalyticsSettings, Config, DashboardSettings, InventorySettings};

/// Prefix of environment variables that override file settings, e.g.
/// `TALLY__ANALYTICS__TOP_PRODUCTS_LIMIT=3`.
pub const ENV_PREFIX: &str = "TALLY";

/// Loads the application configuration.
///
/// Reads `path` if given (it must exist), otherwise an optional `config.toml`
/// in the working directory, then layers `TALLY__*` environment variables on
/// top. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Loaded configuration.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::DateLabelFormat;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn reads_a_partial_file() {
        let file = write_config(
            r#"
            [analytics]
            top_products_limit = 3
            date_label_format = "day_month_year"

            [inventory]
            low_stock_threshold = 5
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.analytics.top_products_limit, 3);
        assert_eq!(config.analytics.date_label_format, DateLabelFormat::DayMonthYear);
        assert_eq!(config.analytics.utc_offset_minutes, 0);
        assert_eq!(config.inventory.low_stock_threshold, 5);
        assert_eq!(config.dashboard, DashboardSettings::default());
    }

    #[test]
    #[serial]
    fn environment_overrides_the_file() {
        let file = write_config("[dashboard]\nchart_window = 14\n");

        // SAFETY: `#[serial]` keeps other tests from touching the environment concurrently.
        unsafe { std::env::set_var("TALLY__DASHBOARD__CHART_WINDOW", "30") };
        let result = load_config(Some(file.path()));
        unsafe { std::env::remove_var("TALLY__DASHBOARD__CHART_WINDOW") };

        assert_eq!(result.unwrap().dashboard.chart_window, 30);
    }

    #[test]
    #[serial]
    fn invalid_values_fail_validation() {
        let file = write_config("[analytics]\ntop_products_limit = 0\n");

        let err = load_config(Some(file.path())).unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    #[serial]
    fn missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/tally.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
