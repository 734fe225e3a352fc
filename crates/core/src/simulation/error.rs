//! Simulation error types.

use flowcast_shared::AppError;
use thiserror::Error;

/// Purchase simulation validation errors.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Purchase amount must be positive.
    #[error("Purchase amount must be greater than zero")]
    InvalidAmount,

    /// Installment purchases need an installment count of at least 1.
    #[error("Installment purchases require at least one installment")]
    InvalidInstallments,
}

impl From<SimulationError> for AppError {
    fn from(error: SimulationError) -> Self {
        Self::Validation(error.to_string())
    }
}
