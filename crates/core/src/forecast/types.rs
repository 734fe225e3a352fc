//! Forecast data types.

use flowcast_shared::types::ForecastId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::MonthKey;

/// Forecast model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForecastModel {
    /// Two-point linear trend extrapolation.
    Linear,
    /// Linear trend with per-calendar-month seasonal factors.
    Seasonal,
    /// Bootstrap resampling of historical months.
    MonteCarlo,
}

impl ForecastModel {
    /// Model tag reported in results.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Linear => "linear_regression",
            Self::Seasonal => "seasonal_adjustment",
            Self::MonteCarlo => "monte_carlo",
        }
    }

    /// Confidence annotation reported in results.
    ///
    /// These are fixed per model and independent of the requested
    /// `confidence_level`, which only shapes Monte Carlo percentile bands.
    #[must_use]
    pub fn confidence(self) -> Decimal {
        match self {
            Self::Linear => Decimal::new(80, 2),
            Self::Seasonal => Decimal::new(85, 2),
            Self::MonteCarlo => Decimal::new(95, 2),
        }
    }
}

/// Parameters for running a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastParams {
    /// Which model to run.
    pub model: ForecastModel,
    /// Number of months to project into the future (1-60).
    pub horizon_months: u32,
    /// Requested confidence level (0.5-0.99). Shapes Monte Carlo bands.
    pub confidence_level: Decimal,
    /// Seed for Monte Carlo sampling. Defaults to 0 for reproducible runs.
    pub seed: Option<u64>,
    /// Free-form model tuning parameters. Reserved; currently unused.
    pub parameters: serde_json::Value,
}

impl ForecastParams {
    /// Creates parameters with the default 0.95 confidence level.
    #[must_use]
    pub fn new(model: ForecastModel, horizon_months: u32) -> Self {
        Self {
            model,
            horizon_months,
            confidence_level: Decimal::new(95, 2),
            seed: None,
            parameters: serde_json::Value::Null,
        }
    }
}

/// Projected amounts for a single future month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// The projected month.
    pub month: MonthKey,
    /// Projected income. Never negative.
    pub income: Decimal,
    /// Projected expenses. Never negative.
    pub expenses: Decimal,
    /// Projected profit (`income - expenses`). May be negative.
    pub profit: Decimal,
}

/// Percentile band around a projected month's profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionBand {
    /// The projected month.
    pub month: MonthKey,
    /// Lower percentile bound.
    pub lower: Decimal,
    /// Upper percentile bound.
    pub upper: Decimal,
}

/// Result of a forecast run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Unique forecast run ID.
    pub forecast_id: ForecastId,
    /// Model tag (e.g., "linear_regression").
    pub model: String,
    /// Confidence annotation for the model.
    pub confidence: Decimal,
    /// Projected months, in ascending order.
    pub points: Vec<ForecastPoint>,
    /// Percentile bands around profit. Monte Carlo only.
    pub bands: Option<Vec<ProjectionBand>>,
    /// Number of scenarios sampled. Monte Carlo only.
    pub scenario_count: Option<u32>,
    /// Hash of the parameters (for caching).
    pub parameters_hash: String,
    /// Whether this result was returned from cache.
    pub cached: bool,
}
