//! Forecast engine: validation and model dispatch.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use flowcast_shared::types::ForecastId;
use rust_decimal::Decimal;

use super::error::ForecastError;
use super::types::{ForecastModel, ForecastParams, ForecastResult};
use super::{linear, monte_carlo, seasonal};
use crate::ledger::{MonthKey, Transaction, monthly_series};

/// Minimum forecast horizon in months.
pub const MIN_HORIZON_MONTHS: u32 = 1;
/// Maximum forecast horizon in months.
pub const MAX_HORIZON_MONTHS: u32 = 60;

/// Engine for running forecasts.
///
/// Dispatches to one model per run, selected once from the params. All
/// models share the same contract over the aggregated monthly series, and
/// none of them errors on an empty transaction history.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    monte_carlo_repetitions: u32,
}

impl ForecastEngine {
    /// Default number of Monte Carlo repetitions.
    pub const DEFAULT_REPETITIONS: u32 = 1000;

    /// Creates an engine with the given Monte Carlo repetition count.
    #[must_use]
    pub const fn new(monte_carlo_repetitions: u32) -> Self {
        Self {
            monte_carlo_repetitions,
        }
    }

    /// Validates forecast parameters.
    ///
    /// Runs before any computation; a validation failure never produces
    /// partial results.
    pub fn validate_params(params: &ForecastParams) -> Result<(), ForecastError> {
        if !(MIN_HORIZON_MONTHS..=MAX_HORIZON_MONTHS).contains(&params.horizon_months) {
            return Err(ForecastError::InvalidHorizon);
        }

        let min_confidence = Decimal::new(50, 2);
        let max_confidence = Decimal::new(99, 2);
        if params.confidence_level < min_confidence || params.confidence_level > max_confidence {
            return Err(ForecastError::InvalidConfidenceLevel);
        }

        Ok(())
    }

    /// Runs a forecast over a transaction snapshot.
    ///
    /// `origin` is the current month; projections start at `origin + 1`.
    pub fn run(
        &self,
        transactions: &[Transaction],
        origin: MonthKey,
        params: &ForecastParams,
    ) -> Result<ForecastResult, ForecastError> {
        Self::validate_params(params)?;

        let series = monthly_series(transactions);
        let horizon = params.horizon_months;

        let (points, bands, scenario_count) = match params.model {
            ForecastModel::Linear => (linear::project(&series, origin, horizon), None, None),
            ForecastModel::Seasonal => (seasonal::project(&series, origin, horizon), None, None),
            ForecastModel::MonteCarlo => {
                let outcome = monte_carlo::project(
                    &series,
                    origin,
                    horizon,
                    self.monte_carlo_repetitions,
                    params.confidence_level,
                    params.seed.unwrap_or(0),
                );
                (
                    outcome.points,
                    Some(outcome.bands),
                    Some(self.monte_carlo_repetitions),
                )
            }
        };

        Ok(ForecastResult {
            forecast_id: ForecastId::new(),
            model: params.model.tag().to_string(),
            confidence: params.model.confidence(),
            points,
            bands,
            scenario_count,
            parameters_hash: Self::hash_params(params),
            cached: false,
        })
    }

    /// Hashes forecast parameters to a stable string key.
    #[must_use]
    pub fn hash_params(params: &ForecastParams) -> String {
        let mut hasher = DefaultHasher::new();
        params.model.tag().hash(&mut hasher);
        params.horizon_months.hash(&mut hasher);
        params.confidence_level.hash(&mut hasher);
        params.seed.hash(&mut hasher);
        params.parameters.to_string().hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    /// Cache key covering the parameters, origin, and a snapshot fingerprint.
    ///
    /// The fingerprint (count, date range, totals) keeps a cached forecast
    /// from being served after the underlying ledger changes.
    #[must_use]
    pub fn cache_key(
        transactions: &[Transaction],
        origin: MonthKey,
        params: &ForecastParams,
    ) -> String {
        let mut hasher = DefaultHasher::new();
        Self::hash_params(params).hash(&mut hasher);
        origin.hash(&mut hasher);

        transactions.len().hash(&mut hasher);
        transactions.iter().map(|t| t.date).min().hash(&mut hasher);
        transactions.iter().map(|t| t.date).max().hash(&mut hasher);
        let total: Decimal = transactions.iter().map(Transaction::signed_amount).sum();
        total.hash(&mut hasher);

        format!("{:016x}", hasher.finish())
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REPETITIONS)
    }
}
