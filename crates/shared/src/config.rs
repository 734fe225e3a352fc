//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Forecast engine configuration.
    #[serde(default)]
    pub forecast: ForecastConfig,
}

/// Forecast engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Number of Monte Carlo repetitions per forecast.
    #[serde(default = "default_monte_carlo_repetitions")]
    pub monte_carlo_repetitions: u32,
    /// Maximum number of cached forecast results.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live for cached forecast results, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Default horizon for baseline projections, in months.
    #[serde(default = "default_baseline_horizon")]
    pub baseline_horizon_months: u32,
}

fn default_monte_carlo_repetitions() -> u32 {
    1000
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

fn default_baseline_horizon() -> u32 {
    12
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            monte_carlo_repetitions: default_monte_carlo_repetitions(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl(),
            baseline_horizon_months: default_baseline_horizon(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            forecast: ForecastConfig::default(),
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
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FLOWCAST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.monte_carlo_repetitions, 1000);
        assert_eq!(config.cache_capacity, 100);
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.baseline_horizon_months, 12);
    }
}
