//! Thin typed client for the Wargaming.net public API.

use std::sync::Arc;

use itertools::Itertools;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::prelude::*;
use crate::wargaming::models::{AccountInfo, FoundAccount, TankStats, Vehicle};
use crate::wargaming::response::Response;

pub mod models;
pub mod response;

pub type AccountId = i32;
pub type TankId = i32;

/// Game flavor served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Game {
    /// World of Tanks.
    Wot,

    /// World of Tanks Blitz.
    Blitz,
}

impl Game {
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Wot => "https://api.worldoftanks.ru/wot",
            Self::Blitz => "https://api.wotblitz.ru/wotb",
        }
    }
}

#[derive(Clone)]
pub struct WargamingApi {
    game: Game,
    application_id: Arc<String>,
    client: reqwest::Client,
}

impl WargamingApi {
    pub fn new(game: Game, application_id: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(clap::crate_name!(), "/", clap::crate_version!()))
            .timeout(StdDuration::from_secs(25))
            .build()?;
        Ok(Self {
            game,
            application_id: Arc::new(application_id.to_string()),
            client,
        })
    }

    /// See <https://developers.wargaming.net/reference/all/wot/account/list/>.
    #[instrument(skip_all, fields(query = query))]
    pub async fn search_accounts(&self, query: &str) -> Result<Vec<FoundAccount>> {
        self.call("account/list", &[("limit", "20"), ("search", query)])
            .await
    }

    /// See <https://developers.wargaming.net/reference/all/wot/account/info/>.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_account_info(&self, account_id: AccountId) -> Result<Option<AccountInfo>> {
        self.call_by_account("account/info", account_id).await
    }

    /// See <https://developers.wargaming.net/reference/all/wot/tanks/stats/>.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_tanks_stats(&self, account_id: AccountId) -> Result<Vec<TankStats>> {
        Ok(self
            .call_by_account("tanks/stats", account_id)
            .await?
            .unwrap_or_default())
    }

    /// See <https://developers.wargaming.net/reference/all/wot/encyclopedia/vehicles/>.
    ///
    /// Ids unknown to the encyclopedia come back as `null` and are skipped.
    #[instrument(skip_all, fields(n_tank_ids = tank_ids.len()))]
    pub async fn get_vehicles(&self, tank_ids: &[TankId]) -> Result<AHashMap<TankId, Vehicle>> {
        let tank_id = tank_ids.iter().join(",");
        self.call::<AHashMap<String, Option<Vehicle>>>(
            "encyclopedia/vehicles",
            &[("tank_id", tank_id.as_str())],
        )
        .await?
        .into_iter()
        .filter_map(|(tank_id, vehicle)| vehicle.map(|vehicle| (tank_id, vehicle)))
        .map(|(tank_id, vehicle)| {
            tank_id
                .parse::<TankId>()
                .map(|tank_id| (tank_id, vehicle))
                .map_err(|error| anyhow!(error))
        })
        .collect()
    }

    /// Convenience for the endpoints that key their data by account id.
    async fn call_by_account<T: DeserializeOwned>(
        &self,
        path: &str,
        account_id: AccountId,
    ) -> Result<Option<T>> {
        let account_id = account_id.to_string();
        let mut map: AHashMap<String, Option<T>> = self
            .call(path, &[("account_id", account_id.as_str())])
            .await?;
        Ok(map.remove(&account_id).flatten())
    }

    async fn call<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}/", self.game.base_url(), path);
        debug!(url = url.as_str(), "sending the request…");
        let response = self
            .client
            .get(&url)
            .query(&[("application_id", self.application_id.as_str())])
            .query(query)
            .send()
            .await
            .with_context(|| format!("failed to call `{}`", path))?
            .error_for_status()?
            .json::<Response<T>>()
            .await
            .with_context(|| format!("failed to parse the `{}` response", path))?;
        match response {
            Response::Data { data } => Ok(data),
            Response::Error { error } => Err(anyhow!(
                "the API returned an error: {:?} (code {})",
                error.message,
                error.code,
            )),
        }
    }
}
