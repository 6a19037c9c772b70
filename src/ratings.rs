//! Closed-form skill-rating formulas.
//!
//! Every function here is pure: no I/O, no state, no validation. Division by
//! zero follows IEEE-754, so degenerate inputs (an account with zero battles,
//! an empty WN8 pairing set) come out as NaN or an infinity rather than an
//! error. Callers run the result through
//! [`FiniteOrZero`](crate::oh_my_std::FiniteOrZero) before showing it.

use std::f64::consts::E;

pub use self::classification::{classify, PlayerClass, StatKind};

pub mod classification;
pub mod wn8;

/// Career per-battle averages consumed by [`wn6`] and [`wn7`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WnInput {
    pub avg_tier: f64,
    pub avg_damage: f64,
    pub avg_spotted: f64,
    pub avg_frags: f64,
    pub avg_def: f64,

    /// Victory rate in percent, 0–100.
    pub win_rate: f64,

    pub battles: f64,
}

/// Inputs of the efficiency rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffInput {
    pub avg_tier: f64,
    pub avg_damage: f64,
    pub avg_spotted: f64,
    pub avg_frags: f64,
    pub avg_def: f64,
    pub avg_cap: f64,
}

/// Inputs of the XTE rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XteInput {
    pub avg_damage: f64,
    pub avg_frags: f64,
    pub battles: f64,
}

/// A computed rating tagged by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Wn6(f64),
    Wn7(f64),
    Wn8(f64),
    Eff(f64),
    Xte(f64),
}

impl Rating {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wn6(_) => "WN6",
            Self::Wn7(_) => "WN7",
            Self::Wn8(_) => "WN8",
            Self::Eff(_) => "EFF",
            Self::Xte(_) => "XTE",
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Wn6(value)
            | Self::Wn7(value)
            | Self::Wn8(value)
            | Self::Eff(value)
            | Self::Xte(value) => value,
        }
    }

    #[must_use]
    pub fn class(self) -> PlayerClass {
        match self {
            Self::Wn6(value) => classify(StatKind::Wn6, value),
            Self::Wn7(value) => classify(StatKind::Wn7, value),
            Self::Wn8(value) => classify(StatKind::Wn8, value),
            Self::Eff(value) => classify(StatKind::Eff, value),
            Self::Xte(value) => classify(StatKind::Xte, value),
        }
    }
}

/// WN6.
///
/// `avg_tier` must be positive: the frags term raises the capped tier to a
/// fractional power.
#[must_use]
pub fn wn6(input: &WnInput) -> f64 {
    let level = input.avg_tier.min(6.0);
    frags_term(level, input.avg_frags)
        + damage_term(level, input.avg_damage)
        + input.avg_spotted * 125.0
        + input.avg_def.min(2.2) * 100.0
        + win_rate_term(input.win_rate)
        + (6.0 - level) * -60.0
}

/// WN7.
///
/// Shares the frags, damage, defence and win-rate terms with [`wn6`], scales
/// the spotting term down at low tiers and replaces the flat tier bonus with
/// a battle-count penalty.
#[must_use]
pub fn wn7(input: &WnInput) -> f64 {
    let level = input.avg_tier.min(6.0);
    let penalty = -((5.0 - input.avg_tier.min(5.0)) * 125.0)
        / (1.0
            + E.powf(
                input.avg_tier
                    - (input.battles / 220_f64.powf(3.0 / input.avg_tier)) * 1.5,
            ));
    frags_term(level, input.avg_frags)
        + damage_term(level, input.avg_damage)
        + input.avg_spotted * 125.0 * input.avg_tier.min(3.0) / 3.0
        + input.avg_def.min(2.2) * 100.0
        + win_rate_term(input.win_rate)
        + penalty
}

/// The efficiency rating.
#[must_use]
pub fn eff(input: &EffInput) -> f64 {
    input.avg_damage * (10.0 / (input.avg_tier + 2.0)) * (0.204 + 2.0 * input.avg_tier / 100.0)
        + input.avg_frags * 250.0
        + input.avg_spotted * 150.0
        + logc(input.avg_cap + 1.0, 1.732) * 150.0
        + input.avg_def * 150.0
}

/// XTE. Zero battles yield a non-finite value.
#[must_use]
pub fn xte(input: &XteInput) -> f64 {
    250.0 * (3.0 * input.avg_damage + input.avg_frags) / input.battles
}

fn frags_term(level: f64, avg_frags: f64) -> f64 {
    (1240.0 - 1040.0 / level.powf(0.164)) * avg_frags
}

fn damage_term(level: f64, avg_damage: f64) -> f64 {
    avg_damage * 530.0 / (184.0 * E.powf(0.24 * level) + 130.0)
}

fn win_rate_term(win_rate: f64) -> f64 {
    (185.0 / (0.17 + E.powf((win_rate - 35.0) * -0.134)) - 500.0) * 0.45
}

fn logc(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}
