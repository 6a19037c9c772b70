use serde::Deserialize;

use crate::prelude::*;
use crate::wargaming::models::AllStats;
use crate::wargaming::AccountId;

/// Wargaming.net account information.
#[derive(Deserialize, Debug, Clone)]
pub struct AccountInfo {
    #[serde(rename = "account_id")]
    pub id: AccountId,

    pub nickname: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub last_battle_time: DateTime,

    #[serde(rename = "statistics")]
    pub stats: AccountStats,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct AccountStats {
    pub all: AllStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_info_map_ok() -> Result {
        let mut map = serde_json::from_str::<AHashMap<String, Option<AccountInfo>>>(
            // language=JSON
            r#"{"73892": {"account_id": 73892, "nickname": "Straik", "last_battle_time": 1635269048, "created_at": 1415225091, "statistics": {"all": {"battles": 9676, "wins": 5318, "damage_dealt": 10427192, "spotted": 9100, "frags": 8197, "dropped_capture_points": 5882, "capture_points": 5447, "xp": 6743639, "max_frags": 6, "hits_percents": 78}}}}"#,
        )?;
        let info = map.remove("73892").flatten().unwrap();
        assert_eq!(info.id, 73892);
        assert_eq!(info.nickname, "Straik");
        assert_eq!(info.stats.all.battles, 9676);
        assert_eq!(info.stats.all.max_frags, 6);
        Ok(())
    }

    #[test]
    fn missing_account_is_null_ok() -> Result {
        let mut map = serde_json::from_str::<AHashMap<String, Option<AccountInfo>>>(
            // language=JSON
            r#"{"1": null}"#,
        )?;
        assert!(map.remove("1").flatten().is_none());
        Ok(())
    }
}
