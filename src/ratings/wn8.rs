//! WN8: the player's performance normalised against per-vehicle expected
//! values, aggregated over every vehicle that has a published baseline.

use itertools::{merge_join_by, EitherOrBoth};

use crate::wargaming::TankId;

/// Accumulated totals for one vehicle over all of a player's battles in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleStats {
    pub tank_id: TankId,
    pub damage_dealt: f64,
    pub spotted: f64,
    pub frags: f64,
    pub dropped_capture_points: f64,
    pub battles: f64,
    pub wins: f64,
}

impl VehicleStats {
    /// Victory rate in percent. Undefined for zero battles.
    #[allow(dead_code)]
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        100.0 * self.wins / self.battles
    }
}

/// Population-average expected performance for one vehicle type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedStats {
    pub tank_id: TankId,
    pub damage: f64,
    pub spot: f64,
    pub frags: f64,
    pub def: f64,

    /// Expected victory rate in percent, 0–100.
    pub win_rate: f64,
}

/// Whole-career totals, the numerators of the WN8 ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountTotals {
    pub damage_dealt: f64,
    pub spotted: f64,
    pub frags: f64,
    pub dropped_capture_points: f64,
    pub battles: f64,
    pub wins: f64,
}

/// Matches the player's vehicles with their expected baselines by tank id.
///
/// Both inputs may come in any order and may contain ids missing from the
/// other side: unmatched entries are dropped from both, duplicated ids
/// collapse into a single entry. The output is ordered by tank id ascending.
#[must_use]
pub fn pair(
    mut current: Vec<VehicleStats>,
    mut expected: Vec<ExpectedStats>,
) -> Vec<(VehicleStats, ExpectedStats)> {
    current.sort_unstable_by_key(|stats| stats.tank_id);
    current.dedup_by_key(|stats| stats.tank_id);
    expected.sort_unstable_by_key(|stats| stats.tank_id);
    expected.dedup_by_key(|stats| stats.tank_id);

    merge_join_by(current, expected, |left, right| left.tank_id.cmp(&right.tank_id))
        .filter_map(|item| match item {
            EitherOrBoth::Both(current, expected) => Some((current, expected)),
            _ => None,
        })
        .collect()
}

#[derive(Default)]
struct ExpectedTotals {
    damage: f64,
    spot: f64,
    frags: f64,
    def: f64,
    wins: f64,
}

/// WN8 over an already [`pair`]ed vehicle set.
///
/// An empty pairing set leaves every expected total at zero and the ratios
/// non-finite; the value is returned as is.
#[must_use]
pub fn wn8(pairs: &[(VehicleStats, ExpectedStats)], account: &AccountTotals) -> f64 {
    let mut expected = ExpectedTotals::default();
    for (current, baseline) in pairs {
        expected.damage += baseline.damage * current.battles;
        expected.spot += baseline.spot * current.battles;
        expected.frags += baseline.frags * current.battles;
        expected.def += baseline.def * current.battles;
        expected.wins += 0.01 * baseline.win_rate * current.battles;
    }

    let r_damage = account.damage_dealt / expected.damage;
    let r_spot = account.spotted / expected.spot;
    let r_frag = account.frags / expected.frags;
    let r_def = account.dropped_capture_points / expected.def;
    let r_win = (account.wins / account.battles) / (expected.wins / account.battles);

    let r_damage_c = ((r_damage - 0.22) / 0.78).max(0.0);
    let r_spot_c = ((r_spot - 0.38) / 0.62).min(r_damage_c + 0.1).max(0.0);
    let r_frag_c = ((r_frag - 0.12) / 0.88).min(r_damage_c + 0.2).max(0.0);
    let r_def_c = ((r_def - 0.10) / 0.90).min(r_damage_c + 0.1).max(0.0);
    let r_win_c = ((r_win - 0.71) / 0.29).max(0.0);

    980.0 * r_damage_c
        + 210.0 * r_damage_c * r_frag_c
        + 155.0 * r_frag_c * r_spot_c
        + 75.0 * r_def_c * r_frag_c
        + 145.0 * r_win_c.min(1.8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(
        tank_id: TankId,
        damage_dealt: f64,
        spotted: f64,
        frags: f64,
        dropped_capture_points: f64,
        battles: f64,
        wins: f64,
    ) -> VehicleStats {
        VehicleStats {
            tank_id,
            damage_dealt,
            spotted,
            frags,
            dropped_capture_points,
            battles,
            wins,
        }
    }

    fn baseline(
        tank_id: TankId,
        damage: f64,
        spot: f64,
        frags: f64,
        def: f64,
        win_rate: f64,
    ) -> ExpectedStats {
        ExpectedStats {
            tank_id,
            damage,
            spot,
            frags,
            def,
            win_rate,
        }
    }

    fn current() -> Vec<VehicleStats> {
        vec![
            vehicle(1, 150000.0, 120.0, 95.0, 40.0, 100.0, 55.0),
            vehicle(2, 390000.0, 310.0, 210.0, 85.0, 200.0, 108.0),
        ]
    }

    fn expected() -> Vec<ExpectedStats> {
        vec![
            baseline(1, 1200.0, 1.1, 0.85, 0.45, 51.0),
            baseline(2, 1650.0, 1.3, 1.05, 0.35, 52.5),
        ]
    }

    fn account() -> AccountTotals {
        AccountTotals {
            damage_dealt: 540000.0,
            spotted: 430.0,
            frags: 305.0,
            dropped_capture_points: 125.0,
            battles: 300.0,
            wins: 163.0,
        }
    }

    #[test]
    fn wn8_reference_ok() {
        let pairs = pair(current(), expected());
        assert!((wn8(&pairs, &account()) - 1961.2151597929).abs() < 1e-6);
    }

    #[test]
    fn wn8_single_vehicle_reference_ok() {
        let pairs = pair(
            vec![vehicle(10, 300000.0, 260.0, 220.0, 90.0, 100.0, 75.0)],
            vec![baseline(10, 1500.0, 1.2, 0.9, 0.5, 52.0)],
        );
        let account = AccountTotals {
            damage_dealt: 300000.0,
            spotted: 260.0,
            frags: 220.0,
            dropped_capture_points: 90.0,
            battles: 100.0,
            wins: 75.0,
        };
        assert!((wn8(&pairs, &account) - 4954.9274161736).abs() < 1e-6);
    }

    #[test]
    fn pairing_is_order_independent_ok() {
        let straight = pair(current(), expected());
        let mut shuffled_current = current();
        shuffled_current.reverse();
        let permuted = pair(shuffled_current, expected());
        assert_eq!(straight, permuted);
        assert_eq!(
            wn8(&straight, &account()).to_bits(),
            wn8(&permuted, &account()).to_bits()
        );
    }

    #[test]
    fn pairing_drops_unmatched_ids_ok() {
        let mut with_extra = current();
        with_extra.push(vehicle(99, 1e6, 1e3, 1e3, 1e3, 1e3, 1e3));
        let mut expected_with_extra = expected();
        expected_with_extra.push(baseline(100, 2000.0, 2.0, 2.0, 2.0, 60.0));

        let pairs = pair(with_extra, expected_with_extra);
        assert_eq!(pairs, pair(current(), expected()));
        assert!((wn8(&pairs, &account()) - 1961.2151597929).abs() < 1e-6);
    }

    #[test]
    fn pairing_dedups_ok() {
        let mut duplicated = current();
        let repeated = duplicated[0];
        duplicated.push(repeated);
        let mut duplicated_expected = expected();
        let repeated = duplicated_expected[1];
        duplicated_expected.push(repeated);
        assert_eq!(
            pair(duplicated, duplicated_expected),
            pair(current(), expected())
        );
    }

    #[test]
    fn empty_pairing_not_finite_ok() {
        assert!(!wn8(&[], &account()).is_finite());
    }

    #[test]
    fn damage_ratio_never_negative_ok() {
        // Every ratio is far below its floor, so every coefficient clamps to
        // zero, including the win one.
        let pairs = pair(
            vec![vehicle(10, 10000.0, 20.0, 5.0, 1.0, 100.0, 30.0)],
            vec![baseline(10, 1500.0, 1.2, 0.9, 0.5, 52.0)],
        );
        let account = AccountTotals {
            damage_dealt: 10000.0,
            spotted: 20.0,
            frags: 5.0,
            dropped_capture_points: 1.0,
            battles: 100.0,
            wins: 30.0,
        };
        assert_eq!(wn8(&pairs, &account), 0.0);
    }

    #[test]
    fn win_contribution_capped_ok() {
        // All ratios but the win one clamp to zero, and the win one is pushed
        // far beyond the cap.
        let pairs = pair(
            vec![vehicle(10, 100.0, 1.0, 1.0, 0.0, 100.0, 95.0)],
            vec![baseline(10, 1500.0, 1.2, 0.9, 0.5, 10.0)],
        );
        let account = AccountTotals {
            damage_dealt: 100.0,
            spotted: 1.0,
            frags: 1.0,
            dropped_capture_points: 0.0,
            battles: 100.0,
            wins: 95.0,
        };
        let value = wn8(&pairs, &account);
        assert!((value - 145.0 * 1.8).abs() < 1e-9);
    }
}
