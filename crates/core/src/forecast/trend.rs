//! Two-point linear trend fitting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::MonthlyAggregate;

/// A linear trend over forward month offsets.
///
/// `value_at(i) = slope * i + intercept`, where `i` is the 1-indexed offset
/// of the projected month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Change per month.
    pub slope: Decimal,
    /// Anchor value; offset 0 reproduces the last observed value.
    pub intercept: Decimal,
}

impl TrendLine {
    /// The flat zero trend.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            slope: Decimal::ZERO,
            intercept: Decimal::ZERO,
        }
    }

    /// Trend value at the given forward month offset.
    #[must_use]
    pub fn value_at(&self, offset: u32) -> Decimal {
        self.slope * Decimal::from(offset) + self.intercept
    }
}

/// Income and expense trends fitted over the same monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPair {
    /// Income trend.
    pub income: TrendLine,
    /// Expense trend.
    pub expenses: TrendLine,
}

impl TrendPair {
    /// Fits both trends over a monthly series sorted ascending by month.
    ///
    /// This is a two-point fit, not a least-squares regression: the slope is
    /// the average change between the first and last points, and the
    /// intercept anchors the trend at the last observed value. Fewer than
    /// two points yield the flat zero trend for both series.
    #[must_use]
    pub fn fit(series: &[MonthlyAggregate]) -> Self {
        let n = series.len();
        if n < 2 {
            return Self {
                income: TrendLine::zero(),
                expenses: TrendLine::zero(),
            };
        }

        let first = &series[0];
        let last = &series[n - 1];
        let span = Decimal::from(n as u64 - 1);

        Self {
            income: TrendLine {
                slope: (last.income - first.income) / span,
                intercept: last.income,
            },
            expenses: TrendLine {
                slope: (last.expenses - first.expenses) / span,
                intercept: last.expenses,
            },
        }
    }
}
