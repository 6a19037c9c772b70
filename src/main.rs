use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod aggregator;
mod helpers;
mod oh_my_std;
mod opts;
mod pipeline;
mod prelude;
mod rate;
mod ratings;
mod report;
mod search;
mod wargaming;
mod watch;
mod xvm;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    match opts.subcommand {
        Subcommand::Search(opts) => search::run(opts).await,
        Subcommand::Rate(opts) => rate::run(opts).await,
        Subcommand::Watch(opts) => watch::run(opts).await,
    }
}
