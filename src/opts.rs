//! CLI options.

use std::str::FromStr;

use clap::{Args, Parser};

use crate::prelude::*;
use crate::wargaming::{AccountId, Game};

#[derive(Parser)]
#[command(version, about, rename_all = "kebab-case")]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "WOT_RATINGS_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry traces sample rate
    #[arg(long, default_value_t = 0.0)]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Search(SearchOpts),
    Rate(RateOpts),
    Watch(WatchOpts),
}

/// Searches accounts by nickname
#[derive(Args)]
pub struct SearchOpts {
    #[command(flatten)]
    pub api: ApiOpts,

    /// Nickname or its prefix
    pub query: String,
}

/// Calculates the ratings once and prints the report
#[derive(Args)]
pub struct RateOpts {
    #[command(flatten)]
    pub api: ApiOpts,

    /// Account ID
    #[arg(value_parser = parse_account_id)]
    pub account_id: AccountId,
}

/// Keeps recalculating the ratings on a fixed interval
#[derive(Args)]
pub struct WatchOpts {
    #[command(flatten)]
    pub api: ApiOpts,

    /// Account ID
    #[arg(value_parser = parse_account_id)]
    pub account_id: AccountId,

    /// Refresh interval
    #[arg(long, default_value = "1m", value_parser = humantime::parse_duration)]
    pub interval: StdDuration,
}

#[derive(Args)]
pub struct ApiOpts {
    /// Wargaming.net API application ID
    #[arg(short = 'a', long, env = "WOT_RATINGS_APPLICATION_ID")]
    pub application_id: String,

    /// Game flavor
    #[arg(long, value_enum, default_value = "wot")]
    pub game: Game,
}

fn parse_account_id(value: &str) -> Result<AccountId> {
    let account_id = AccountId::from_str(value)?;
    if account_id >= 1 {
        Ok(account_id)
    } else {
        Err(anyhow!("{} is not a valid account ID", account_id))
    }
}
