//! Calendar-month bucketing of transactions.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use super::transaction::{Transaction, TransactionKind};

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// The calendar month.
    pub month: MonthKey,
    /// Sum of all income amounts in the month.
    pub income: Decimal,
    /// Sum of absolute values of all expense amounts in the month.
    pub expenses: Decimal,
}

impl MonthlyAggregate {
    /// Creates an empty aggregate for a month.
    #[must_use]
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }
    }

    /// Net cash flow for the month.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// Groups transactions into per-month aggregates.
///
/// Input order is irrelevant and the input may be empty. Months with no
/// transactions are absent from the result. The `BTreeMap` iterates in
/// ascending month order, which downstream trend fitting relies on.
#[must_use]
pub fn aggregate_by_month(transactions: &[Transaction]) -> BTreeMap<MonthKey, MonthlyAggregate> {
    let mut buckets: BTreeMap<MonthKey, MonthlyAggregate> = BTreeMap::new();

    for transaction in transactions {
        let month = MonthKey::from_date(transaction.date);
        let aggregate = buckets
            .entry(month)
            .or_insert_with(|| MonthlyAggregate::empty(month));

        match transaction.kind {
            TransactionKind::Income => aggregate.income += transaction.amount,
            TransactionKind::Expense => aggregate.expenses += transaction.amount.abs(),
        }
    }

    buckets
}

/// Aggregates transactions and returns the months in ascending order.
#[must_use]
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyAggregate> {
    aggregate_by_month(transactions).into_values().collect()
}
