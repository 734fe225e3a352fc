//! Forecast service over injected collaborators.

use flowcast_shared::AppResult;
use flowcast_shared::config::ForecastConfig;
use flowcast_shared::types::{BusinessId, Money};

use super::cache::ForecastCache;
use super::engine::ForecastEngine;
use super::types::{ForecastParams, ForecastResult};
use crate::ledger::MonthKey;
use crate::projection::{BaselineProjection, project_baseline, starting_balance};
use crate::simulation::{Purchase, PurchaseSimulationPoint, PurchaseSimulator};
use crate::store::{BusinessStore, Clock, RecurringItemStore, TransactionStore};

/// Service tying the forecasting core to a store and a clock.
///
/// The store supplies transaction snapshots, the clock supplies the
/// projection origin, and results are cached per parameter set and
/// snapshot fingerprint.
pub struct ForecastService<S, C> {
    store: S,
    clock: C,
    engine: ForecastEngine,
    cache: ForecastCache,
    config: ForecastConfig,
}

impl<S, C> ForecastService<S, C>
where
    S: TransactionStore + RecurringItemStore + BusinessStore,
    C: Clock,
{
    /// Creates a service with the given collaborators and configuration.
    #[must_use]
    pub fn new(store: S, clock: C, config: ForecastConfig) -> Self {
        let engine = ForecastEngine::new(config.monte_carlo_repetitions);
        let cache = ForecastCache::with_config(config.cache_capacity, config.cache_ttl_secs);
        Self {
            store,
            clock,
            engine,
            cache,
            config,
        }
    }

    /// Runs a forecast for a business.
    ///
    /// Projections start at the month after the clock's current month.
    pub fn run_forecast(
        &self,
        business_id: BusinessId,
        params: &ForecastParams,
    ) -> AppResult<ForecastResult> {
        self.store.business(business_id)?;
        let transactions = self.store.list_transactions(business_id)?;
        let origin = MonthKey::from_date(self.clock.today());

        let result = self
            .cache
            .run_cached(&self.engine, &transactions, origin, params)?;
        Ok(result)
    }

    /// Builds the baseline running-balance projection for a business.
    ///
    /// `horizon` defaults to the configured baseline horizon.
    pub fn baseline_projection(
        &self,
        business_id: BusinessId,
        horizon: Option<u32>,
    ) -> AppResult<BaselineProjection> {
        let profile = self.store.business(business_id)?;
        let transactions = self.store.list_transactions(business_id)?;
        let recurring = self.store.list_recurring_items(business_id)?;
        let origin = MonthKey::from_date(self.clock.today());
        let horizon = horizon.unwrap_or(self.config.baseline_horizon_months);

        let points = project_baseline(&transactions, &recurring, origin, horizon)?;
        Ok(BaselineProjection {
            business_id,
            starting_balance: Money::new(starting_balance(&transactions), profile.currency),
            points,
        })
    }

    /// Overlays a hypothetical purchase on the business's baseline.
    pub fn simulate_purchase(
        &self,
        business_id: BusinessId,
        horizon: Option<u32>,
        purchase: &Purchase,
    ) -> AppResult<Vec<PurchaseSimulationPoint>> {
        let baseline = self.baseline_projection(business_id, horizon)?;
        Ok(PurchaseSimulator::run(&baseline.points, purchase)?)
    }
}
