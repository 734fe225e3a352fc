//! Property-based tests for monthly aggregation.

use chrono::NaiveDate;
use flowcast_shared::types::{BusinessId, TransactionId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregate::{aggregate_by_month, monthly_series};
use super::month::MonthKey;
use super::transaction::{Transaction, TransactionKind};

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        2020i32..2030,
        1u32..=12,
        1u32..=28,
        -1_000_000i64..1_000_000,
        any::<bool>(),
    )
        .prop_map(|(year, month, day, cents, is_income)| Transaction {
            id: TransactionId::new(),
            business_id: BusinessId::new(),
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            amount: Decimal::new(cents, 2),
            kind: if is_income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
            description: String::new(),
            category: None,
        })
}

proptest! {
    /// Total aggregated income equals the sum of all income amounts, and
    /// total aggregated expenses equal the sum of absolute expense amounts.
    #[test]
    fn test_aggregation_preserves_totals(
        transactions in prop::collection::vec(arb_transaction(), 0..50),
    ) {
        let expected_income: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expected_expenses: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount.abs())
            .sum();

        let buckets = aggregate_by_month(&transactions);
        let total_income: Decimal = buckets.values().map(|a| a.income).sum();
        let total_expenses: Decimal = buckets.values().map(|a| a.expenses).sum();

        prop_assert_eq!(total_income, expected_income);
        prop_assert_eq!(total_expenses, expected_expenses);
    }

    /// Two transactions in the same calendar month share a bucket, so the
    /// number of buckets equals the number of distinct months in the input.
    #[test]
    fn test_one_bucket_per_distinct_month(
        transactions in prop::collection::vec(arb_transaction(), 0..50),
    ) {
        let mut distinct: Vec<MonthKey> = transactions
            .iter()
            .map(|t| MonthKey::from_date(t.date))
            .collect();
        distinct.sort_unstable();
        distinct.dedup();

        let buckets = aggregate_by_month(&transactions);
        prop_assert_eq!(buckets.len(), distinct.len());
    }

    /// The series is strictly ascending by month key.
    #[test]
    fn test_series_is_sorted(
        transactions in prop::collection::vec(arb_transaction(), 0..50),
    ) {
        let series = monthly_series(&transactions);
        for window in series.windows(2) {
            prop_assert!(window[0].month < window[1].month);
        }
    }
}
