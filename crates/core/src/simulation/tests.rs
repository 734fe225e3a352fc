//! Property-based tests for purchase simulation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::simulator::PurchaseSimulator;
use super::types::{Purchase, PurchaseKind, PurchaseSimulationPoint};
use crate::ledger::MonthKey;
use crate::projection::BalancePoint;

fn arb_baseline() -> impl Strategy<Value = Vec<BalancePoint>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 0..24).prop_map(|balances| {
        balances
            .iter()
            .enumerate()
            .map(|(i, &cents)| BalancePoint {
                month: MonthKey::new(2026, 1).plus_months(i as u32),
                income: Decimal::ZERO,
                expenses: Decimal::ZERO,
                net_flow: Decimal::ZERO,
                balance: Decimal::new(cents, 2),
            })
            .collect()
    })
}

fn arb_purchase() -> impl Strategy<Value = Purchase> {
    (1i64..1_000_000, any::<bool>(), 1u32..12, 0usize..30).prop_map(
        |(cents, one_time, installments, start)| Purchase {
            amount: Decimal::new(cents, 2),
            kind: if one_time {
                PurchaseKind::OneTime
            } else {
                PurchaseKind::Installments
            },
            installments: if one_time { None } else { Some(installments) },
            start_month_index: start,
        },
    )
}

/// Months the purchase actually pays in, given the baseline length.
fn applied_months(purchase: &Purchase, baseline_len: usize) -> usize {
    let window = match purchase.kind {
        PurchaseKind::OneTime => 1,
        PurchaseKind::Installments => purchase.installments.unwrap_or(1) as usize,
    };
    let start = purchase.start_month_index.min(baseline_len);
    let end = (purchase.start_month_index + window).min(baseline_len);
    end - start
}

/// Per-month payment, mirroring the simulator's split.
fn per_month(purchase: &Purchase) -> Decimal {
    match purchase.kind {
        PurchaseKind::OneTime => purchase.amount,
        PurchaseKind::Installments => {
            purchase.amount / Decimal::from(purchase.installments.unwrap_or(1))
        }
    }
}

proptest! {
    /// The simulated balance always equals the original balance plus the
    /// cumulative adjustment up to and including that month.
    #[test]
    fn test_cumulative_adjustment_invariant(
        baseline in arb_baseline(),
        purchase in arb_purchase(),
    ) {
        let points = PurchaseSimulator::run(&baseline, &purchase).unwrap();
        prop_assert_eq!(points.len(), baseline.len());

        let mut cumulative = Decimal::ZERO;
        for (point, original) in points.iter().zip(&baseline) {
            cumulative += point.adjustment;
            prop_assert_eq!(point.original_balance, original.balance);
            prop_assert_eq!(point.simulated_balance, original.balance + cumulative);
        }
    }

    /// Every month inside the payment window carries exactly the per-month
    /// payment; every month outside carries zero.
    #[test]
    fn test_adjustments_match_payment_window(
        baseline in arb_baseline(),
        purchase in arb_purchase(),
    ) {
        let points = PurchaseSimulator::run(&baseline, &purchase).unwrap();
        let per = per_month(&purchase);
        let applied = applied_months(&purchase, baseline.len());

        let in_window: Vec<&PurchaseSimulationPoint> = points
            .iter()
            .filter(|p| !p.adjustment.is_zero())
            .collect();
        prop_assert_eq!(in_window.len(), applied);
        for point in in_window {
            prop_assert_eq!(point.adjustment, -per);
        }
    }

    /// Once the payment window has passed, simulated and original balances
    /// move in lockstep: the gap between them stays constant.
    #[test]
    fn test_gap_is_constant_outside_window(
        baseline in arb_baseline(),
        purchase in arb_purchase(),
    ) {
        let points = PurchaseSimulator::run(&baseline, &purchase).unwrap();
        for window in points.windows(2) {
            if window[1].adjustment.is_zero() {
                let gap_before = window[0].simulated_balance - window[0].original_balance;
                let gap_after = window[1].simulated_balance - window[1].original_balance;
                prop_assert_eq!(gap_before, gap_after);
            }
        }
    }
}
