//! Baseline projection builder.

use rust_decimal::Decimal;

use super::types::{BalancePoint, ProjectionError, RecurringItem};
use crate::forecast::engine::{MAX_HORIZON_MONTHS, MIN_HORIZON_MONTHS};
use crate::ledger::{MonthKey, Transaction, TransactionKind, monthly_series};

/// Current balance implied by a transaction snapshot.
///
/// The sum of every transaction's signed contribution.
#[must_use]
pub fn starting_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Builds a baseline running-balance projection.
///
/// Each projected month carries the historical mean monthly income and
/// expenses plus the recurring items, and the balance is the cumulative sum
/// of net flows from the starting balance. An empty history projects from
/// the recurring items alone.
pub fn project_baseline(
    transactions: &[Transaction],
    recurring: &[RecurringItem],
    origin: MonthKey,
    horizon: u32,
) -> Result<Vec<BalancePoint>, ProjectionError> {
    if !(MIN_HORIZON_MONTHS..=MAX_HORIZON_MONTHS).contains(&horizon) {
        return Err(ProjectionError::InvalidHorizon);
    }

    let series = monthly_series(transactions);
    let month_count = Decimal::from(series.len().max(1) as u64);
    let mean_income: Decimal =
        series.iter().map(|a| a.income).sum::<Decimal>() / month_count;
    let mean_expenses: Decimal =
        series.iter().map(|a| a.expenses).sum::<Decimal>() / month_count;

    let recurring_income: Decimal = recurring
        .iter()
        .filter(|item| item.kind == TransactionKind::Income)
        .map(|item| item.amount)
        .sum();
    let recurring_expenses: Decimal = recurring
        .iter()
        .filter(|item| item.kind == TransactionKind::Expense)
        .map(|item| item.amount.abs())
        .sum();

    let income = mean_income + recurring_income;
    let expenses = mean_expenses + recurring_expenses;
    let net_flow = income - expenses;

    let mut balance = starting_balance(transactions);
    let points = (1..=horizon)
        .map(|offset| {
            balance += net_flow;
            BalancePoint {
                month: origin.plus_months(offset),
                income,
                expenses,
                net_flow,
                balance,
            }
        })
        .collect();

    Ok(points)
}
