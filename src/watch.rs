use std::sync::Arc;

use tokio::signal;
use tokio::time::interval;
use tracing::{info, warn};

use crate::opts::WatchOpts;
use crate::pipeline::{Inflight, RatingPipeline};
use crate::prelude::*;
use crate::wargaming::WargamingApi;
use crate::xvm::XvmClient;

/// Recalculates the ratings on the given interval until interrupted.
///
/// Each tick supersedes a refresh that is still running, so exactly one
/// refresh is in flight at any time. The expected-values snapshot is loaded
/// once at start-up; this loop owns the decision not to reload it.
pub async fn run(opts: WatchOpts) -> Result {
    let api = WargamingApi::new(opts.api.game, &opts.api.application_id)?;
    let expected = Arc::new(XvmClient::new()?.get_expected_values().await?);
    let pipeline = RatingPipeline::new(api);

    let mut inflight = Inflight::default();
    let mut interval = interval(opts.interval);

    info!(account_id = opts.account_id, interval = ?opts.interval, "watching…");
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let pipeline = pipeline.clone();
                let expected = Arc::clone(&expected);
                let account_id = opts.account_id;
                inflight.supersede(async move {
                    match pipeline.refresh(account_id, &expected).await {
                        Ok(report) => println!("{report}\n"),
                        Err(error) => warn!("refresh failed: {:#}", error),
                    }
                });
            }
            result = signal::ctrl_c() => {
                result?;
                info!("interrupted");
                break Ok(());
            }
        }
    }
}
