//! Purchase simulation engine.

use rust_decimal::Decimal;

use super::error::SimulationError;
use super::types::{Purchase, PurchaseKind, PurchaseSimulationPoint};
use crate::projection::BalancePoint;

/// Engine for overlaying purchases on baseline projections.
pub struct PurchaseSimulator;

impl PurchaseSimulator {
    /// Validates a purchase.
    pub fn validate(purchase: &Purchase) -> Result<(), SimulationError> {
        if purchase.amount <= Decimal::ZERO {
            return Err(SimulationError::InvalidAmount);
        }
        if purchase.kind == PurchaseKind::Installments
            && purchase.installments.is_none_or(|n| n < 1)
        {
            return Err(SimulationError::InvalidInstallments);
        }
        Ok(())
    }

    /// Runs a purchase simulation over a baseline projection.
    ///
    /// The simulated balance is recomputed in a single forward pass: the
    /// cumulative adjustment carries into every later month, resetting only
    /// at the start of the series. A start index beyond the baseline's end
    /// reproduces the baseline unchanged.
    pub fn run(
        baseline: &[BalancePoint],
        purchase: &Purchase,
    ) -> Result<Vec<PurchaseSimulationPoint>, SimulationError> {
        Self::validate(purchase)?;

        let mut cumulative = Decimal::ZERO;
        let points = baseline
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let adjustment = Self::adjustment_at(purchase, index);
                cumulative += adjustment;
                PurchaseSimulationPoint {
                    month: point.month,
                    income: point.income,
                    expenses: point.expenses,
                    net_flow: point.net_flow,
                    original_balance: point.balance,
                    adjustment,
                    simulated_balance: point.balance + cumulative,
                }
            })
            .collect();

        Ok(points)
    }

    /// Signed adjustment a purchase applies at a baseline index.
    fn adjustment_at(purchase: &Purchase, index: usize) -> Decimal {
        let start = purchase.start_month_index;
        match purchase.kind {
            PurchaseKind::OneTime => {
                if index == start {
                    -purchase.amount
                } else {
                    Decimal::ZERO
                }
            }
            PurchaseKind::Installments => {
                let Some(installments) = purchase.installments else {
                    return Decimal::ZERO;
                };
                let end = start.saturating_add(installments as usize);
                if index >= start && index < end {
                    -(purchase.amount / Decimal::from(installments))
                } else {
                    Decimal::ZERO
                }
            }
        }
    }
}
