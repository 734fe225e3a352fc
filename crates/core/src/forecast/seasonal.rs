//! Seasonal adjustment model.
//!
//! Projects along the linear trend, scaled by per-calendar-month factors so
//! that months which historically run above or below the mean keep doing so
//! in the projection.

use rust_decimal::Decimal;

use super::trend::TrendPair;
use super::types::ForecastPoint;
use crate::ledger::{MonthKey, MonthlyAggregate};

/// Multiplicative factors per calendar month (index 0 = January).
///
/// A factor is the mean of that calendar month's observations divided by the
/// overall mean. Months with no history, or a zero overall mean, factor to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalFactors {
    income: [Decimal; 12],
    expenses: [Decimal; 12],
}

impl SeasonalFactors {
    /// Computes factors from a monthly series.
    #[must_use]
    pub fn compute(series: &[MonthlyAggregate]) -> Self {
        Self {
            income: factors_for(series, |a| a.income),
            expenses: factors_for(series, |a| a.expenses),
        }
    }

    /// Income factor for a calendar month (1-12).
    #[must_use]
    pub fn income_for(&self, month: u32) -> Decimal {
        self.income[(month as usize - 1) % 12]
    }

    /// Expense factor for a calendar month (1-12).
    #[must_use]
    pub fn expenses_for(&self, month: u32) -> Decimal {
        self.expenses[(month as usize - 1) % 12]
    }
}

fn factors_for(
    series: &[MonthlyAggregate],
    value: impl Fn(&MonthlyAggregate) -> Decimal,
) -> [Decimal; 12] {
    let mut factors = [Decimal::ONE; 12];
    if series.is_empty() {
        return factors;
    }

    let total: Decimal = series.iter().map(&value).sum();
    let overall_mean = total / Decimal::from(series.len() as u64);
    if overall_mean.is_zero() {
        return factors;
    }

    let mut sums = [Decimal::ZERO; 12];
    let mut counts = [0u32; 12];
    for aggregate in series {
        let slot = (aggregate.month.month as usize - 1) % 12;
        sums[slot] += value(aggregate);
        counts[slot] += 1;
    }

    for slot in 0..12 {
        if counts[slot] > 0 {
            let month_mean = sums[slot] / Decimal::from(counts[slot]);
            factors[slot] = month_mean / overall_mean;
        }
    }

    factors
}

/// Projects the monthly series forward with seasonal scaling.
///
/// Magnitudes are clamped to zero like the linear model.
#[must_use]
pub fn project(series: &[MonthlyAggregate], origin: MonthKey, horizon: u32) -> Vec<ForecastPoint> {
    let trend = TrendPair::fit(series);
    let factors = SeasonalFactors::compute(series);

    (1..=horizon)
        .map(|offset| {
            let month = origin.plus_months(offset);
            let income = (trend.income.value_at(offset) * factors.income_for(month.month))
                .max(Decimal::ZERO);
            let expenses = (trend.expenses.value_at(offset) * factors.expenses_for(month.month))
                .max(Decimal::ZERO);
            ForecastPoint {
                month,
                income,
                expenses,
                profit: income - expenses,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn aggregate(year: i32, month: u32, income: Decimal) -> MonthlyAggregate {
        MonthlyAggregate {
            month: MonthKey::new(year, month),
            income,
            expenses: Decimal::ZERO,
        }
    }

    #[test]
    fn test_uniform_history_has_unit_factors() {
        let series = vec![
            aggregate(2025, 1, dec!(100)),
            aggregate(2025, 2, dec!(100)),
            aggregate(2025, 3, dec!(100)),
        ];
        let factors = SeasonalFactors::compute(&series);
        for month in 1..=12 {
            assert_eq!(factors.income_for(month), Decimal::ONE);
        }
    }

    #[test]
    fn test_strong_month_factors_above_one() {
        // December runs at double the January/February level.
        let series = vec![
            aggregate(2025, 1, dec!(100)),
            aggregate(2025, 2, dec!(100)),
            aggregate(2025, 12, dec!(200)),
        ];
        let factors = SeasonalFactors::compute(&series);

        // Overall mean is 400/3; December mean is 200.
        assert_eq!(factors.income_for(12), dec!(200) / (dec!(400) / dec!(3)));
        assert!(factors.income_for(12) > Decimal::ONE);
        assert!(factors.income_for(1) < Decimal::ONE);
        // Months without history stay neutral.
        assert_eq!(factors.income_for(6), Decimal::ONE);
    }

    #[test]
    fn test_empty_history_projects_zeros() {
        let points = project(&[], MonthKey::new(2025, 6), 6);
        assert_eq!(points.len(), 6);
        for point in &points {
            assert_eq!(point.income, Decimal::ZERO);
            assert_eq!(point.expenses, Decimal::ZERO);
        }
    }

    #[test]
    fn test_projection_scales_trend_by_calendar_month() {
        // Flat income of 120 across a full year, except a 240 December.
        let mut series: Vec<MonthlyAggregate> =
            (1..=11).map(|m| aggregate(2025, m, dec!(120))).collect();
        series.push(aggregate(2025, 12, dec!(240)));

        let points = project(&series, MonthKey::new(2025, 12), 12);

        // The projected December (offset 12) is scaled above its neighbors.
        let december = points.iter().find(|p| p.month.month == 12).unwrap();
        let june = points.iter().find(|p| p.month.month == 6).unwrap();
        assert!(december.income > june.income);
    }

    #[test]
    fn test_magnitudes_clamped_to_zero() {
        let series = vec![
            aggregate(2025, 1, dec!(500)),
            aggregate(2025, 2, dec!(100)),
        ];
        let points = project(&series, MonthKey::new(2025, 2), 6);
        for point in &points {
            assert!(point.income >= Decimal::ZERO);
        }
    }
}
