//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Static data file locations.
    #[serde(default)]
    pub data: DataConfig,
    /// Budget visualiser defaults.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Location comparison defaults.
    #[serde(default)]
    pub compare: CompareConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Static data file locations.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the per-country statistics JSON.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Path to the currency rate table JSON.
    #[serde(default = "default_rates_path")]
    pub rates_path: String,
}

fn default_dataset_path() -> String {
    "data/dataset.json".to_string()
}

fn default_rates_path() -> String {
    "data/currencies.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            rates_path: default_rates_path(),
        }
    }
}

/// Budget visualiser defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Monthly budget the session starts with.
    #[serde(default = "default_budget_total")]
    pub total: Decimal,
    /// Currency the session starts in.
    #[serde(default = "default_budget_currency")]
    pub currency: String,
    /// Location whose category averages seed the session.
    #[serde(default = "default_budget_location")]
    pub location: String,
}

fn default_budget_total() -> Decimal {
    Decimal::from(1600)
}

fn default_budget_currency() -> String {
    "USD".to_string()
}

fn default_budget_location() -> String {
    "JPN".to_string()
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            total: default_budget_total(),
            currency: default_budget_currency(),
            location: default_budget_location(),
        }
    }
}

/// Location comparison defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareConfig {
    /// Base location every other location is scored against.
    #[serde(default = "default_compare_base")]
    pub base: String,
    /// Locations to compare.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Optional sort key (`income`, `spending` or `pps`).
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_compare_base() -> String {
    "USA".to_string()
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            base: default_compare_base(),
            locations: Vec::new(),
            sort: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "livingcost=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources in order: `config/default`, `config/{RUN_MODE}`, then
    /// `LIVINGCOST__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LIVINGCOST")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("compare.locations")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "LIVINGCOST__BUDGET__TOTAL",
                "LIVINGCOST__COMPARE__BASE",
                "LIVINGCOST__COMPARE__LOCATIONS",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.data.dataset_path, "data/dataset.json");
                assert_eq!(config.budget.total, dec!(1600));
                assert_eq!(config.budget.currency, "USD");
                assert_eq!(config.compare.base, "USA");
                assert!(config.compare.locations.is_empty());
                assert_eq!(config.log.filter, "livingcost=info");
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("LIVINGCOST__BUDGET__TOTAL", Some("700")),
                ("LIVINGCOST__BUDGET__CURRENCY", Some("EUR")),
                ("LIVINGCOST__COMPARE__LOCATIONS", Some("SWE,JPN")),
                ("LIVINGCOST__COMPARE__SORT", Some("pps")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.budget.total, dec!(700));
                assert_eq!(config.budget.currency, "EUR");
                assert_eq!(config.compare.locations, vec!["SWE", "JPN"]);
                assert_eq!(config.compare.sort.as_deref(), Some("pps"));
            },
        );
    }
}
