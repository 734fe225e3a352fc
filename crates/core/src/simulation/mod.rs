//! What-if purchase simulations.
//!
//! Overlays a hypothetical one-time or installment purchase onto a baseline
//! projection, producing a parallel "with vs. without" balance series.

pub mod error;
pub mod simulator;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::SimulationError;
pub use simulator::PurchaseSimulator;
pub use types::{Purchase, PurchaseKind, PurchaseSimulationPoint};
