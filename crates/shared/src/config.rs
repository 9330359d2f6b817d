//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Calculation defaults.
    #[serde(default)]
    pub calculation: CalculationSettings,
    /// Simulation cache configuration.
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Default values applied when a project or price entry does not specify its own.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationSettings {
    /// Default profit margin in percent.
    #[serde(default = "default_profit_margin")]
    pub default_profit_margin: Decimal,
    /// Default indirect-cost rate in percent of subtotal.
    #[serde(default = "default_indirect_rate")]
    pub default_indirect_rate: Decimal,
    /// Average labor cost per hour, used for labor-hour estimates.
    #[serde(default = "default_hourly_rate")]
    pub average_hourly_rate: Decimal,
}

/// Simulation cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of cached simulation results.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for cached results in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_profit_margin() -> Decimal {
    // 15%
    Decimal::new(15, 0)
}

fn default_indirect_rate() -> Decimal {
    // Transport 2% + tools 1.5% + machinery 2.5% + overhead 5%
    Decimal::new(11, 0)
}

fn default_hourly_rate() -> Decimal {
    Decimal::new(2000, 2)
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    300
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            default_profit_margin: default_profit_margin(),
            default_indirect_rate: default_indirect_rate(),
            average_hourly_rate: default_hourly_rate(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            calculation: CalculationSettings::default(),
            cache: CacheSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("OBRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
