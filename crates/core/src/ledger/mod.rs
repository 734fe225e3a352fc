//! Transactions and monthly aggregation.
//!
//! This module implements the ledger-facing half of the forecasting core:
//! - Transaction domain types
//! - Per-record screening of raw transaction data
//! - Calendar-month bucketing into monthly aggregates

pub mod aggregate;
pub mod month;
pub mod records;
pub mod transaction;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{MonthlyAggregate, aggregate_by_month, monthly_series};
pub use month::MonthKey;
pub use records::{RecordError, RejectedRecord, ScreeningOutcome, TransactionRecord, screen_records};
pub use transaction::{Transaction, TransactionKind};
