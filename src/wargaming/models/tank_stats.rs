use serde::Deserialize;

use crate::wargaming::models::AllStats;
use crate::wargaming::TankId;

/// Accumulated statistics for one of the player's vehicles.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct TankStats {
    pub tank_id: TankId,
    pub all: AllStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn tanks_stats_ok() -> Result {
        let mut map = serde_json::from_str::<AHashMap<String, Option<Vec<TankStats>>>>(
            // language=JSON
            r#"{"73892": [{"tank_id": 6673, "mark_of_mastery": 4, "in_garage": null, "all": {"battles": 100, "wins": 55, "damage_dealt": 150000, "spotted": 120, "frags": 95, "dropped_capture_points": 40, "capture_points": 61, "xp": 80500}}]}"#,
        )?;
        let tanks = map.remove("73892").flatten().unwrap();
        assert_eq!(tanks.len(), 1);
        assert_eq!(tanks[0].tank_id, 6673);
        assert_eq!(tanks[0].all.battles, 100);
        assert_eq!(tanks[0].all.max_frags, 0);
        Ok(())
    }
}
