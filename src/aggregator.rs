//! Turns raw API statistics into rating-engine inputs.

use crate::oh_my_std::round_to;
use crate::ratings::wn8::{AccountTotals, ExpectedStats, VehicleStats};
use crate::ratings::{EffInput, WnInput, XteInput};
use crate::wargaming::models::{AllStats, TankStats, Vehicle};
use crate::xvm::ExpectedValues;

/// Selects the played vehicles that have an expected baseline, producing the
/// two sequences the WN8 pairing consumes.
///
/// A vehicle with no baseline is silently excluded, never an error.
pub fn select_rated_vehicles(
    tanks: &[TankStats],
    expected: &ExpectedValues,
) -> (Vec<VehicleStats>, Vec<ExpectedStats>) {
    let mut current = Vec::new();
    let mut baselines = Vec::new();
    for tank in tanks {
        if tank.all.battles == 0 {
            continue;
        }
        if let Some(baseline) = expected.get(tank.tank_id) {
            current.push(to_vehicle_stats(tank));
            baselines.push(*baseline);
        }
    }
    (current, baselines)
}

fn to_vehicle_stats(tank: &TankStats) -> VehicleStats {
    VehicleStats {
        tank_id: tank.tank_id,
        damage_dealt: tank.all.damage_dealt as f64,
        spotted: tank.all.spotted as f64,
        frags: tank.all.frags as f64,
        dropped_capture_points: tank.all.dropped_capture_points as f64,
        battles: tank.all.battles as f64,
        wins: tank.all.wins as f64,
    }
}

/// Whole-career totals as the WN8 ratio numerators.
pub fn account_totals(all: &AllStats) -> AccountTotals {
    AccountTotals {
        damage_dealt: all.damage_dealt as f64,
        spotted: all.spotted as f64,
        frags: all.frags as f64,
        dropped_capture_points: all.dropped_capture_points as f64,
        battles: all.battles as f64,
        wins: all.wins as f64,
    }
}

/// Career per-battle averages, rounded the way they are displayed.
///
/// Zero battles make every average NaN; the values flow through the formulas
/// untouched and are sanitised at the report boundary.
#[derive(Debug, Clone, Copy)]
pub struct Averages {
    pub damage: f64,
    pub spotted: f64,
    pub frags: f64,
    pub def: f64,
    pub cap: f64,

    /// Victory rate in percent, 0–100.
    pub win_rate: f64,

    pub battles: f64,
}

impl Averages {
    #[must_use]
    pub fn new(all: &AllStats) -> Self {
        Self {
            damage: round_to(all.damage_per_battle(), 2),
            spotted: round_to(all.spotted_per_battle(), 2),
            frags: round_to(all.frags_per_battle(), 2),
            def: round_to(all.def_per_battle(), 2),
            cap: round_to(all.cap_per_battle(), 2),
            win_rate: round_to(all.win_rate(), 2),
            battles: all.battles as f64,
        }
    }

    #[must_use]
    pub fn wn_input(&self, avg_tier: f64) -> WnInput {
        WnInput {
            avg_tier,
            avg_damage: self.damage,
            avg_spotted: self.spotted,
            avg_frags: self.frags,
            avg_def: self.def,
            win_rate: self.win_rate,
            battles: self.battles,
        }
    }

    #[must_use]
    pub fn eff_input(&self, avg_tier: f64) -> EffInput {
        EffInput {
            avg_tier,
            avg_damage: self.damage,
            avg_spotted: self.spotted,
            avg_frags: self.frags,
            avg_def: self.def,
            avg_cap: self.cap,
        }
    }

    #[must_use]
    pub fn xte_input(&self) -> XteInput {
        XteInput {
            avg_damage: self.damage,
            avg_frags: self.frags,
            battles: self.battles,
        }
    }
}

/// Arithmetic mean tier over the rated vehicle set. NaN when it is empty.
pub fn average_tier<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> f64 {
    let (sum, count) = vehicles
        .into_iter()
        .fold((0, 0), |(sum, count), vehicle| (sum + vehicle.tier, count + 1));
    f64::from(sum) / f64::from(count)
}
