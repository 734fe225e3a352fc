//! Injected store and clock collaborators.
//!
//! The core never fetches data itself: callers hand it a transaction
//! snapshot through these traits. The in-memory store backs tests and
//! standalone use with explicit read/write methods instead of ambient
//! global state.

use std::collections::HashMap;

use chrono::NaiveDate;
use flowcast_shared::types::{BusinessId, Currency};
use flowcast_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::ledger::Transaction;
use crate::projection::RecurringItem;

/// A business known to the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Unique identifier.
    pub id: BusinessId,
    /// Display name.
    pub name: String,
    /// Currency all of the business's amounts are denominated in.
    pub currency: Currency,
}

/// Lists transactions for a business.
pub trait TransactionStore {
    /// Returns every transaction for the business. The core does not
    /// paginate or filter; bounding the snapshot is the caller's concern.
    fn list_transactions(&self, business_id: BusinessId) -> AppResult<Vec<Transaction>>;
}

/// Lists recurring items for a business.
pub trait RecurringItemStore {
    /// Returns every recurring item for the business.
    fn list_recurring_items(&self, business_id: BusinessId) -> AppResult<Vec<RecurringItem>>;
}

/// Looks up business profiles.
pub trait BusinessStore {
    /// Returns the business profile, or `NotFound`.
    fn business(&self, business_id: BusinessId) -> AppResult<BusinessProfile>;
}

/// Supplies the current date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    businesses: HashMap<BusinessId, BusinessProfile>,
    transactions: HashMap<BusinessId, Vec<Transaction>>,
    recurring: HashMap<BusinessId, Vec<RecurringItem>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a business.
    pub fn insert_business(&mut self, profile: BusinessProfile) {
        self.businesses.insert(profile.id, profile);
    }

    /// Adds a transaction under its business.
    pub fn insert_transaction(&mut self, transaction: Transaction) {
        self.transactions
            .entry(transaction.business_id)
            .or_default()
            .push(transaction);
    }

    /// Adds a recurring item under its business.
    pub fn insert_recurring_item(&mut self, item: RecurringItem) {
        self.recurring.entry(item.business_id).or_default().push(item);
    }
}

impl TransactionStore for MemoryStore {
    fn list_transactions(&self, business_id: BusinessId) -> AppResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .get(&business_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl RecurringItemStore for MemoryStore {
    fn list_recurring_items(&self, business_id: BusinessId) -> AppResult<Vec<RecurringItem>> {
        Ok(self
            .recurring
            .get(&business_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl BusinessStore for MemoryStore {
    fn business(&self, business_id: BusinessId) -> AppResult<BusinessProfile> {
        self.businesses
            .get(&business_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("business {business_id}")))
    }
}
