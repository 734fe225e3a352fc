//! Monte Carlo bootstrap model.
//!
//! Each repetition resamples the historical monthly aggregates: for every
//! projected month it draws a uniformly random historical month and perturbs
//! its income and expenses independently by a uniform factor in the ±20%
//! range. Repetitions are seeded deterministically (`seed + repetition`) and
//! are independent, so they run in parallel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::{ForecastPoint, ProjectionBand};
use crate::ledger::{MonthKey, MonthlyAggregate};

/// Perturbation range in basis points (±20%).
const PERTURBATION_BPS: i64 = 2000;

/// Aggregated outcome of a Monte Carlo run.
#[derive(Debug, Clone)]
pub struct MonteCarloOutcome {
    /// Median projections per month.
    pub points: Vec<ForecastPoint>,
    /// Percentile bands around profit per month.
    pub bands: Vec<ProjectionBand>,
}

/// Runs the bootstrap simulation and aggregates the scenarios.
///
/// Per-month expected values are medians across repetitions; the bands are
/// the `(1 - confidence_level) / 2` percentiles on either side. An empty
/// history or a zero repetition count yields all-zero points and bands.
#[must_use]
pub fn project(
    series: &[MonthlyAggregate],
    origin: MonthKey,
    horizon: u32,
    repetitions: u32,
    confidence_level: Decimal,
    seed: u64,
) -> MonteCarloOutcome {
    if series.is_empty() || repetitions == 0 {
        return zero_outcome(origin, horizon);
    }

    let scenarios: Vec<Vec<(Decimal, Decimal)>> = (0..repetitions)
        .into_par_iter()
        .map(|repetition| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(repetition)));
            sample_scenario(series, horizon, &mut rng)
        })
        .collect();

    let alpha = (Decimal::ONE - confidence_level) / Decimal::TWO;
    let mut points = Vec::with_capacity(horizon as usize);
    let mut bands = Vec::with_capacity(horizon as usize);

    for offset in 0..horizon as usize {
        let mut incomes: Vec<Decimal> = scenarios.iter().map(|s| s[offset].0).collect();
        let mut expenses: Vec<Decimal> = scenarios.iter().map(|s| s[offset].1).collect();
        let mut profits: Vec<Decimal> = scenarios
            .iter()
            .map(|s| s[offset].0 - s[offset].1)
            .collect();
        incomes.sort_unstable();
        expenses.sort_unstable();
        profits.sort_unstable();

        let month = origin.plus_months(offset as u32 + 1);
        let income = median(&incomes);
        let expense = median(&expenses);
        points.push(ForecastPoint {
            month,
            income,
            expenses: expense,
            profit: median(&profits),
        });

        let lower_index = percentile_index(profits.len(), alpha);
        bands.push(ProjectionBand {
            month,
            lower: profits[lower_index],
            upper: profits[profits.len() - 1 - lower_index],
        });
    }

    MonteCarloOutcome { points, bands }
}

fn sample_scenario(
    series: &[MonthlyAggregate],
    horizon: u32,
    rng: &mut StdRng,
) -> Vec<(Decimal, Decimal)> {
    (0..horizon)
        .map(|_| {
            let sampled = &series[rng.random_range(0..series.len())];
            let income = (sampled.income * perturbation(rng)).max(Decimal::ZERO);
            let expenses = (sampled.expenses * perturbation(rng)).max(Decimal::ZERO);
            (income, expenses)
        })
        .collect()
}

fn perturbation(rng: &mut StdRng) -> Decimal {
    Decimal::ONE + Decimal::new(rng.random_range(-PERTURBATION_BPS..=PERTURBATION_BPS), 4)
}

fn median(sorted: &[Decimal]) -> Decimal {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / Decimal::TWO
    } else {
        sorted[n / 2]
    }
}

fn percentile_index(count: usize, alpha: Decimal) -> usize {
    (alpha * Decimal::from(count as u64 - 1))
        .floor()
        .to_usize()
        .unwrap_or(0)
}

fn zero_outcome(origin: MonthKey, horizon: u32) -> MonteCarloOutcome {
    let months: Vec<MonthKey> = (1..=horizon).map(|i| origin.plus_months(i)).collect();
    MonteCarloOutcome {
        points: months
            .iter()
            .map(|&month| ForecastPoint {
                month,
                income: Decimal::ZERO,
                expenses: Decimal::ZERO,
                profit: Decimal::ZERO,
            })
            .collect(),
        bands: months
            .iter()
            .map(|&month| ProjectionBand {
                month,
                lower: Decimal::ZERO,
                upper: Decimal::ZERO,
            })
            .collect(),
    }
}
