//! Baseline running-balance projections.
//!
//! A baseline projection extends the current balance forward using the
//! historical monthly means plus fixed recurring items. It is the series a
//! purchase simulation overlays.

pub mod baseline;
pub mod types;

pub use baseline::{project_baseline, starting_balance};
pub use types::{BalancePoint, BaselineProjection, ProjectionError, RecurringItem};
