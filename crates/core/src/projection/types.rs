//! Projection data types.

use flowcast_shared::AppError;
use flowcast_shared::types::{BusinessId, Money, RecurringItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::{MonthKey, TransactionKind};

/// A fixed monthly income or expense.
///
/// Recurring items are folded into every projected month of a baseline, on
/// top of the historical means.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringItem {
    /// Unique identifier.
    pub id: RecurringItemId,
    /// Business this item belongs to.
    pub business_id: BusinessId,
    /// Item name (e.g., "Office rent").
    pub name: String,
    /// Cash flow direction.
    pub kind: TransactionKind,
    /// Monthly amount. The stored sign is not trusted, as with transactions.
    pub amount: Decimal,
}

/// One month of a baseline projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// The projected month.
    pub month: MonthKey,
    /// Projected income for the month.
    pub income: Decimal,
    /// Projected expenses for the month.
    pub expenses: Decimal,
    /// Net cash flow for the month (`income - expenses`).
    pub net_flow: Decimal,
    /// Running balance after this month.
    pub balance: Decimal,
}

/// A baseline projection for a business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineProjection {
    /// The business projected.
    pub business_id: BusinessId,
    /// Balance at the projection origin.
    pub starting_balance: Money,
    /// Projected months, in ascending order.
    pub points: Vec<BalancePoint>,
}

/// Projection validation errors.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Invalid projection horizon (must be 1-60 months).
    #[error("Projection horizon must be between 1 and 60 months")]
    InvalidHorizon,
}

impl From<ProjectionError> for AppError {
    fn from(error: ProjectionError) -> Self {
        Self::Validation(error.to_string())
    }
}
