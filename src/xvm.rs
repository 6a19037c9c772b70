//! XVM expected-values reference dataset.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::prelude::*;
use crate::ratings::wn8::ExpectedStats;
use crate::wargaming::TankId;

/// Download URL of the current expected-values dataset.
pub const EXPECTED_VALUES_URL: &str = "https://static.modxvm.com/wn8-data-exp/json/wn8exp.json";

#[derive(Deserialize)]
struct ExpectedValuesResponse {
    data: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "IDNum")]
    tank_id: TankId,

    #[serde(rename = "expDamage", default)]
    damage: f64,

    #[serde(rename = "expSpot", default)]
    spot: f64,

    #[serde(rename = "expFrag", default)]
    frags: f64,

    #[serde(rename = "expDef", default)]
    def: f64,

    #[serde(rename = "expWinRate", default)]
    win_rate: f64,
}

impl From<Entry> for ExpectedStats {
    fn from(entry: Entry) -> Self {
        Self {
            tank_id: entry.tank_id,
            damage: entry.damage,
            spot: entry.spot,
            frags: entry.frags,
            def: entry.def,
            win_rate: entry.win_rate,
        }
    }
}

/// Immutable snapshot of per-vehicle expected values.
///
/// Built once per download and passed around by reference; reloading it is
/// the caller's explicit decision, there is no ambient cache.
pub struct ExpectedValues {
    by_tank_id: AHashMap<TankId, ExpectedStats>,
}

impl ExpectedValues {
    #[must_use]
    pub fn get(&self, tank_id: TankId) -> Option<&ExpectedStats> {
        self.by_tank_id.get(&tank_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_tank_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_tank_id.is_empty()
    }
}

impl FromIterator<ExpectedStats> for ExpectedValues {
    /// Collects the baselines, keeping at most one entry per tank id.
    fn from_iter<I: IntoIterator<Item = ExpectedStats>>(iter: I) -> Self {
        let mut by_tank_id = AHashMap::default();
        for stats in iter {
            by_tank_id.entry(stats.tank_id).or_insert(stats);
        }
        Self { by_tank_id }
    }
}

#[derive(Clone)]
pub struct XvmClient {
    client: reqwest::Client,
}

impl XvmClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(clap::crate_name!(), "/", clap::crate_version!()))
            .timeout(StdDuration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    /// Downloads a fresh expected-values snapshot.
    #[instrument(skip_all)]
    pub async fn get_expected_values(&self) -> Result<ExpectedValues> {
        let response: ExpectedValuesResponse = self
            .client
            .get(EXPECTED_VALUES_URL)
            .send()
            .await
            .context("failed to download the expected values")?
            .error_for_status()?
            .json()
            .await
            .context("failed to parse the expected values")?;
        let values: ExpectedValues = response.data.into_iter().map(Into::into).collect();
        debug!(n_vehicles = values.len(), "downloaded");
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dataset_ok() -> Result {
        let response = serde_json::from_str::<ExpectedValuesResponse>(
            // language=JSON
            r#"{"header": {"version": "20211028"}, "data": [{"IDNum": 6673, "expDef": 0.84, "expFrag": 0.97, "expSpot": 1.29, "expDamage": 542.5, "expWinRate": 51.1}, {"IDNum": 1649, "expDef": 0.35, "expFrag": 1.05, "expSpot": 1.1, "expDamage": 1200.9, "expWinRate": 52.5}]}"#,
        )?;
        let values: ExpectedValues = response.data.into_iter().map(Into::into).collect();
        assert_eq!(values.len(), 2);
        let baseline = values.get(6673).unwrap();
        assert_eq!(baseline.damage, 542.5);
        assert_eq!(baseline.win_rate, 51.1);
        assert!(values.get(42).is_none());
        Ok(())
    }

    #[test]
    fn one_baseline_per_tank_id_ok() {
        let duplicate = ExpectedStats {
            tank_id: 6673,
            damage: 1.0,
            spot: 1.0,
            frags: 1.0,
            def: 1.0,
            win_rate: 50.0,
        };
        let values: ExpectedValues =
            [duplicate, ExpectedStats { damage: 2.0, ..duplicate }].into_iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get(6673).unwrap().damage, 1.0);
    }
}
