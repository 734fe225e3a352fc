//! Per-record screening of raw transaction data.
//!
//! Upstream import paths deliver transactions as untyped string records.
//! Screening parses each record independently: a malformed row is skipped,
//! logged, and reported back to the caller; it never aborts the batch.

use std::str::FromStr;

use chrono::NaiveDate;
use flowcast_shared::types::{BusinessId, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use super::transaction::{Transaction, TransactionKind};

/// A raw transaction record, as delivered by an import source.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    /// Transaction date, `YYYY-MM-DD` or an ISO-8601 timestamp.
    pub date: String,
    /// Monetary amount as a decimal string.
    pub amount: String,
    /// Cash flow direction, `INCOME` or `EXPENSE`.
    pub kind: String,
    /// Free-form description.
    pub description: String,
    /// Optional category label.
    pub category: Option<String>,
}

/// Why a single record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The date field could not be parsed.
    #[error("Unparseable date: {0}")]
    InvalidDate(String),

    /// The amount field is not a number.
    #[error("Non-numeric amount: {0}")]
    InvalidAmount(String),

    /// The kind field is not a known direction.
    #[error("Unknown transaction kind: {0}")]
    InvalidKind(String),
}

/// A rejected record with its position in the input batch.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    /// 0-based index of the record in the input batch.
    pub index: usize,
    /// Why the record was rejected.
    pub error: RecordError,
}

/// Result of screening a batch of records.
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    /// Successfully parsed transactions, in input order.
    pub accepted: Vec<Transaction>,
    /// Rejected records, in input order.
    pub rejected: Vec<RejectedRecord>,
}

/// Screens a batch of raw records into transactions.
///
/// Each record is parsed in isolation. Malformed records are skipped with a
/// warning and reported in the outcome; the rest of the batch is unaffected.
#[must_use]
pub fn screen_records(business_id: BusinessId, records: &[TransactionRecord]) -> ScreeningOutcome {
    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match parse_record(business_id, record) {
            Ok(transaction) => accepted.push(transaction),
            Err(error) => {
                warn!(index, %error, "skipping malformed transaction record");
                rejected.push(RejectedRecord { index, error });
            }
        }
    }

    ScreeningOutcome { accepted, rejected }
}

fn parse_record(
    business_id: BusinessId,
    record: &TransactionRecord,
) -> Result<Transaction, RecordError> {
    let date = parse_date(&record.date)?;
    let amount = Decimal::from_str(record.amount.trim())
        .map_err(|_| RecordError::InvalidAmount(record.amount.clone()))?;
    let kind = parse_kind(&record.kind)?;

    Ok(Transaction {
        id: TransactionId::new(),
        business_id,
        date,
        amount,
        kind,
        description: record.description.clone(),
        category: record.category.clone(),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    let trimmed = value.trim();
    // Date-only precision is sufficient: a full ISO-8601 timestamp is
    // accepted by reading its leading date component.
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| RecordError::InvalidDate(value.to_string()))
}

fn parse_kind(value: &str) -> Result<TransactionKind, RecordError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("INCOME") {
        Ok(TransactionKind::Income)
    } else if trimmed.eq_ignore_ascii_case("EXPENSE") {
        Ok(TransactionKind::Expense)
    } else {
        Err(RecordError::InvalidKind(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(date: &str, amount: &str, kind: &str) -> TransactionRecord {
        TransactionRecord {
            date: date.to_string(),
            amount: amount.to_string(),
            kind: kind.to_string(),
            description: "imported".to_string(),
            category: None,
        }
    }

    #[test]
    fn test_valid_batch_is_fully_accepted() {
        let records = vec![
            record("2026-01-05", "1200.00", "INCOME"),
            record("2026-01-20", "350.25", "expense"),
        ];
        let outcome = screen_records(BusinessId::new(), &records);
        assert_eq!(outcome.accepted.len(), 2);
        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.accepted[0].amount, dec!(1200.00));
        assert_eq!(outcome.accepted[1].kind, TransactionKind::Expense);
    }

    #[test]
    fn test_one_bad_row_does_not_abort_the_batch() {
        let records = vec![
            record("2026-01-05", "1200.00", "INCOME"),
            record("not-a-date", "10.00", "INCOME"),
            record("2026-01-20", "350.25", "EXPENSE"),
        ];
        let outcome = screen_records(BusinessId::new(), &records);
        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].index, 1);
        assert!(matches!(
            outcome.rejected[0].error,
            RecordError::InvalidDate(_)
        ));
    }

    #[test]
    fn test_bad_amount_and_kind_are_reported() {
        let records = vec![
            record("2026-01-05", "twelve", "INCOME"),
            record("2026-01-06", "12.00", "REFUND"),
        ];
        let outcome = screen_records(BusinessId::new(), &records);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected.len(), 2);
        assert!(matches!(
            outcome.rejected[0].error,
            RecordError::InvalidAmount(_)
        ));
        assert!(matches!(
            outcome.rejected[1].error,
            RecordError::InvalidKind(_)
        ));
    }

    #[test]
    fn test_timestamp_dates_are_accepted() {
        let records = vec![record("2026-01-05T14:30:00Z", "10.00", "INCOME")];
        let outcome = screen_records(BusinessId::new(), &records);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(
            outcome.accepted[0].date,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_empty_batch() {
        let outcome = screen_records(BusinessId::new(), &[]);
        assert!(outcome.accepted.is_empty());
        assert!(outcome.rejected.is_empty());
    }
}
