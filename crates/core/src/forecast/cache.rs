//! Forecast result caching using Moka.
//!
//! Provides in-memory caching for forecast results to avoid redundant
//! computations when the same parameters are run over an unchanged ledger.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::engine::ForecastEngine;
use super::error::ForecastError;
use super::types::{ForecastParams, ForecastResult};
use crate::ledger::{MonthKey, Transaction};

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for forecast results.
///
/// Keyed by the engine's cache key, which covers both the parameters and a
/// fingerprint of the transaction snapshot, so a cached result is never
/// served after the ledger changes. Thread-safe and suitable for concurrent
/// access.
#[derive(Clone)]
pub struct ForecastCache {
    cache: Cache<String, Arc<ForecastResult>>,
}

impl ForecastCache {
    /// Creates a new forecast cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new forecast cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Runs a forecast, returning cached results if available.
    ///
    /// If a cached result exists for the given parameters and snapshot, it is
    /// returned with `cached: true`. Otherwise, the forecast is run and the
    /// result is cached before being returned. Validation errors are
    /// propagated without touching the cache.
    pub fn run_cached(
        &self,
        engine: &ForecastEngine,
        transactions: &[Transaction],
        origin: MonthKey,
        params: &ForecastParams,
    ) -> Result<ForecastResult, ForecastError> {
        ForecastEngine::validate_params(params)?;

        let cache_key = ForecastEngine::cache_key(transactions, origin, params);

        if let Some(cached_result) = self.cache.get(&cache_key) {
            debug!(%cache_key, "forecast cache hit");
            let mut result = (*cached_result).clone();
            result.cached = true;
            return Ok(result);
        }

        let result = engine.run(transactions, origin, params)?;
        self.cache.insert(cache_key, Arc::new(result.clone()));

        Ok(result)
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background, but calling this explicitly
    /// can help reclaim memory sooner.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::new()
    }
}
