//! Simulation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::MonthKey;

/// How a hypothetical purchase is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseKind {
    /// The full amount in a single month.
    OneTime,
    /// Equal portions over consecutive months.
    Installments,
}

/// A hypothetical purchase to overlay on a baseline projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Total purchase amount. Must be positive.
    pub amount: Decimal,
    /// Payment schedule.
    pub kind: PurchaseKind,
    /// Number of installments. Required (and >= 1) for installment purchases.
    pub installments: Option<u32>,
    /// 0-based index into the baseline where payment starts.
    pub start_month_index: usize,
}

/// One month of a purchase simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSimulationPoint {
    /// The projected month.
    pub month: MonthKey,
    /// Baseline income for the month.
    pub income: Decimal,
    /// Baseline expenses for the month.
    pub expenses: Decimal,
    /// Baseline net cash flow for the month.
    pub net_flow: Decimal,
    /// Balance without the purchase.
    pub original_balance: Decimal,
    /// Signed delta applied in this month; zero outside the payment window.
    pub adjustment: Decimal,
    /// Balance with the purchase: original balance plus every adjustment up
    /// to and including this month.
    pub simulated_balance: Decimal,
}
