//! Forecast error types.

use flowcast_shared::AppError;
use thiserror::Error;

/// Forecast validation errors.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Invalid time horizon (must be 1-60 months).
    #[error("Time horizon must be between 1 and 60 months")]
    InvalidHorizon,

    /// Invalid confidence level (must be 0.5-0.99).
    #[error("Confidence level must be between 0.5 and 0.99")]
    InvalidConfidenceLevel,
}

impl From<ForecastError> for AppError {
    fn from(error: ForecastError) -> Self {
        Self::Validation(error.to_string())
    }
}
