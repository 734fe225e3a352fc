//! Linear trend extrapolation model.

use rust_decimal::Decimal;

use super::trend::TrendPair;
use super::types::ForecastPoint;
use crate::ledger::{MonthKey, MonthlyAggregate};

/// Projects the monthly series forward along its two-point linear trend.
///
/// Projected income and expense magnitudes are clamped to zero: a negative
/// trend cannot drive a projected magnitude below zero. Profit is the
/// difference of the clamped magnitudes and may be negative.
#[must_use]
pub fn project(series: &[MonthlyAggregate], origin: MonthKey, horizon: u32) -> Vec<ForecastPoint> {
    let trend = TrendPair::fit(series);

    (1..=horizon)
        .map(|offset| {
            let income = trend.income.value_at(offset).max(Decimal::ZERO);
            let expenses = trend.expenses.value_at(offset).max(Decimal::ZERO);
            ForecastPoint {
                month: origin.plus_months(offset),
                income,
                expenses,
                profit: income - expenses,
            }
        })
        .collect()
}
