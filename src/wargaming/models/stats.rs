use serde::Deserialize;

/// The `all` (random battles) block shared by the account and per-vehicle
/// statistics endpoints.
#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AllStats {
    pub battles: i32,
    pub wins: i32,
    pub damage_dealt: i64,
    pub spotted: i32,
    pub frags: i32,
    pub dropped_capture_points: i32,

    #[serde(default)]
    pub capture_points: i32,

    #[serde(default)]
    pub max_frags: i32,
}

impl AllStats {
    /// Victory rate in percent. Undefined for zero battles.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        100.0 * self.wins as f64 / self.battles as f64
    }

    #[must_use]
    pub fn damage_per_battle(&self) -> f64 {
        self.damage_dealt as f64 / self.battles as f64
    }

    #[must_use]
    pub fn spotted_per_battle(&self) -> f64 {
        self.spotted as f64 / self.battles as f64
    }

    #[must_use]
    pub fn frags_per_battle(&self) -> f64 {
        self.frags as f64 / self.battles as f64
    }

    #[must_use]
    pub fn def_per_battle(&self) -> f64 {
        self.dropped_capture_points as f64 / self.battles as f64
    }

    #[must_use]
    pub fn cap_per_battle(&self) -> f64 {
        self.capture_points as f64 / self.battles as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_battle_ok() {
        let stats = AllStats {
            battles: 200,
            wins: 108,
            damage_dealt: 390000,
            spotted: 310,
            frags: 210,
            dropped_capture_points: 85,
            capture_points: 120,
            max_frags: 6,
        };
        assert_eq!(stats.win_rate(), 54.0);
        assert_eq!(stats.damage_per_battle(), 1950.0);
        assert_eq!(stats.frags_per_battle(), 1.05);
        assert_eq!(stats.cap_per_battle(), 0.6);
    }
}
