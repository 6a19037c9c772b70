use tracing::warn;

use crate::opts::RateOpts;
use crate::pipeline::RatingPipeline;
use crate::prelude::*;
use crate::wargaming::WargamingApi;
use crate::xvm::XvmClient;

pub async fn run(opts: RateOpts) -> Result {
    let api = WargamingApi::new(opts.api.game, &opts.api.application_id)?;
    let expected = XvmClient::new()?.get_expected_values().await?;
    if expected.is_empty() {
        warn!("the expected-values dataset is empty, WN8 will be zero");
    }
    let report = RatingPipeline::new(api)
        .refresh(opts.account_id, &expected)
        .await?;
    println!("{report}");
    Ok(())
}
