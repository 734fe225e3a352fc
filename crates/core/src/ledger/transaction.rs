//! Transaction domain types.

use chrono::NaiveDate;
use flowcast_shared::types::{BusinessId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction's cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Money coming into the business.
    Income,
    /// Money leaving the business.
    Expense,
}

/// A ledger transaction.
///
/// Transactions are created, mutated, and deleted outside this crate; the
/// core only ever reads a snapshot. Chronological order is not assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Business this transaction belongs to.
    pub business_id: BusinessId,
    /// Transaction date. Time-of-day is ignored.
    pub date: NaiveDate,
    /// Monetary amount. The stored sign is not trusted; see `signed_amount`.
    pub amount: Decimal,
    /// Cash flow direction.
    pub kind: TransactionKind,
    /// Free-form description.
    pub description: String,
    /// Optional category label.
    pub category: Option<String>,
}

impl Transaction {
    /// Effective contribution to cash balance.
    ///
    /// `+amount` for income, `-abs(amount)` for expenses, regardless of the
    /// stored sign.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transaction(amount: Decimal, kind: TransactionKind) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            business_id: BusinessId::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            amount,
            kind,
            description: "test".to_string(),
            category: None,
        }
    }

    #[test]
    fn test_income_contributes_positively() {
        let tx = transaction(dec!(250.00), TransactionKind::Income);
        assert_eq!(tx.signed_amount(), dec!(250.00));
    }

    #[test]
    fn test_expense_contributes_negatively() {
        let tx = transaction(dec!(100.00), TransactionKind::Expense);
        assert_eq!(tx.signed_amount(), dec!(-100.00));
    }

    #[test]
    fn test_expense_sign_is_not_trusted() {
        // An expense stored with a negative amount still drains the balance once.
        let tx = transaction(dec!(-100.00), TransactionKind::Expense);
        assert_eq!(tx.signed_amount(), dec!(-100.00));
    }

    #[test]
    fn test_kind_serde_tags() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, "\"INCOME\"");
        let kind: TransactionKind = serde_json::from_str("\"EXPENSE\"").unwrap();
        assert_eq!(kind, TransactionKind::Expense);
    }
}
