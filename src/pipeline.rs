//! The account refresh pipeline.

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::{info, instrument};

use crate::aggregator::{self, Averages};
use crate::helpers::tracing::format_elapsed;
use crate::prelude::*;
use crate::ratings::{self, wn8, Rating};
use crate::report::PlayerReport;
use crate::wargaming::{AccountId, WargamingApi};
use crate::xvm::ExpectedValues;

/// Runs the ordered fetch-and-calculate sequence for one account.
#[derive(Clone)]
pub struct RatingPipeline {
    api: WargamingApi,
}

impl RatingPipeline {
    #[must_use]
    pub const fn new(api: WargamingApi) -> Self {
        Self { api }
    }

    /// Fetches everything one calculation needs and produces the report.
    ///
    /// The steps are strictly ordered. The expected-values snapshot is
    /// injected by the caller and never reloaded here.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn refresh(
        &self,
        account_id: AccountId,
        expected: &ExpectedValues,
    ) -> Result<PlayerReport> {
        let start_instant = Instant::now();

        let tanks = self.api.get_tanks_stats(account_id).await?;
        let info = self
            .api
            .get_account_info(account_id)
            .await?
            .ok_or_else(|| anyhow!("account #{} does not exist", account_id))?;

        let (current, baselines) = aggregator::select_rated_vehicles(&tanks, expected);
        let pairs = wn8::pair(current, baselines);

        let tank_ids: Vec<_> = pairs.iter().map(|(current, _)| current.tank_id).collect();
        let vehicles = if tank_ids.is_empty() {
            AHashMap::default()
        } else {
            self.api.get_vehicles(&tank_ids).await?
        };
        let avg_tier = aggregator::average_tier(vehicles.values());

        let averages = Averages::new(&info.stats.all);
        let totals = aggregator::account_totals(&info.stats.all);
        let ratings = [
            Rating::Wn6(ratings::wn6(&averages.wn_input(avg_tier))),
            Rating::Wn7(ratings::wn7(&averages.wn_input(avg_tier))),
            Rating::Wn8(wn8::wn8(&pairs, &totals)),
            Rating::Eff(ratings::eff(&averages.eff_input(avg_tier))),
            Rating::Xte(ratings::xte(&averages.xte_input())),
        ];

        let report = PlayerReport::new(&info, &averages, avg_tier, pairs.len(), ratings);
        info!(elapsed = format_elapsed(&start_instant).as_str(), "refreshed");
        Ok(report)
    }
}

/// Holds at most one in-flight refresh task: a new trigger supersedes the
/// previous one instead of running alongside it.
#[derive(Default)]
pub struct Inflight {
    handle: Option<JoinHandle<()>>,
}

impl Inflight {
    /// Aborts the current task, if any, and spawns the new one in its place.
    pub fn supersede<T>(&mut self, task: T)
    where
        T: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.handle = Some(tokio::spawn(task));
    }
}

impl Drop for Inflight {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn supersede_aborts_previous_ok() {
        let mut inflight = Inflight::default();

        let (guard_tx, guard_rx) = oneshot::channel::<()>();
        inflight.supersede(async move {
            let _guard_tx = guard_tx;
            std::future::pending::<()>().await;
        });

        let (done_tx, done_rx) = oneshot::channel();
        inflight.supersede(async move {
            let _ = done_tx.send(());
        });

        // The first task never completes, so its sender is only dropped when
        // the task gets aborted.
        assert!(guard_rx.await.is_err(), "the first task must be aborted");
        assert!(done_rx.await.is_ok(), "the second task must complete");
    }

    #[tokio::test]
    async fn drop_aborts_ok() {
        let (guard_tx, guard_rx) = oneshot::channel::<()>();
        {
            let mut inflight = Inflight::default();
            inflight.supersede(async move {
                let _guard_tx = guard_tx;
                std::future::pending::<()>().await;
            });
        }
        assert!(guard_rx.await.is_err());
    }
}
