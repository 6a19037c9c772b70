//! The plain-text player report.

use std::fmt::{self, Display, Formatter};

use crate::aggregator::Averages;
use crate::oh_my_std::FiniteOrZero;
use crate::prelude::*;
use crate::ratings::{classify, Rating, StatKind};
use crate::wargaming::models::AccountInfo;
use crate::wargaming::AccountId;

/// Everything the final screen shows, already sanitised for display.
pub struct PlayerReport {
    pub nickname: String,
    pub account_id: AccountId,
    pub last_battle_time: DateTime,
    pub battles: i32,
    pub win_rate: f64,
    pub avg_tier: f64,
    pub n_rated_vehicles: usize,
    pub avg_damage: f64,
    pub avg_spotted: f64,
    pub avg_frags: f64,
    pub max_frags: i32,
    pub spotted: i32,
    pub frags: i32,
    pub ratings: [Rating; 5],
}

impl PlayerReport {
    #[must_use]
    pub fn new(
        info: &AccountInfo,
        averages: &Averages,
        avg_tier: f64,
        n_rated_vehicles: usize,
        ratings: [Rating; 5],
    ) -> Self {
        Self {
            nickname: info.nickname.clone(),
            account_id: info.id,
            last_battle_time: info.last_battle_time,
            battles: info.stats.all.battles,
            win_rate: averages.win_rate.finite_or_zero(),
            avg_tier: avg_tier.finite_or_zero(),
            n_rated_vehicles,
            avg_damage: averages.damage.finite_or_zero(),
            avg_spotted: averages.spotted.finite_or_zero(),
            avg_frags: averages.frags.finite_or_zero(),
            max_frags: info.stats.all.max_frags,
            spotted: info.stats.all.spotted,
            frags: info.stats.all.frags,
            ratings: ratings.map(sanitized),
        }
    }
}

/// The explicit sanitisation step: the formulas propagate NaN and infinities,
/// the report never shows them.
fn sanitized(rating: Rating) -> Rating {
    match rating {
        Rating::Wn6(value) => Rating::Wn6(value.finite_or_zero()),
        Rating::Wn7(value) => Rating::Wn7(value.finite_or_zero()),
        Rating::Wn8(value) => Rating::Wn8(value.finite_or_zero()),
        Rating::Eff(value) => Rating::Eff(value.finite_or_zero()),
        Rating::Xte(value) => Rating::Xte(value.finite_or_zero()),
    }
}

impl Display for PlayerReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "{} (#{})", self.nickname, self.account_id)?;
        writeln!(
            formatter,
            "last battle:    {}",
            self.last_battle_time.format("%Y-%m-%d %H:%M"),
        )?;
        writeln!(formatter)?;
        writeln!(
            formatter,
            "battles:        {:>10}  [{}]",
            self.battles,
            classify(StatKind::Battles, f64::from(self.battles)),
        )?;
        writeln!(
            formatter,
            "win rate:       {:>10.2}  [{}]",
            self.win_rate,
            classify(StatKind::WinRate, self.win_rate),
        )?;
        writeln!(formatter, "average tier:   {:>10.1}", self.avg_tier)?;
        writeln!(formatter, "rated vehicles: {:>10}", self.n_rated_vehicles)?;
        writeln!(formatter)?;
        for rating in self.ratings {
            writeln!(
                formatter,
                "{:<4}            {:>10.2}  [{}]",
                rating.name(),
                rating.value(),
                rating.class(),
            )?;
        }
        writeln!(formatter)?;
        writeln!(
            formatter,
            "average damage: {:>10.2}  [{}]",
            self.avg_damage,
            classify(StatKind::Damage, self.avg_damage),
        )?;
        writeln!(
            formatter,
            "max frags:      {:>10}  [{}]",
            self.max_frags,
            classify(StatKind::Frags, f64::from(self.max_frags)),
        )?;
        writeln!(formatter)?;
        writeln!(
            formatter,
            "spotted:        {:>10} total, {:.2} per battle",
            self.spotted, self.avg_spotted,
        )?;
        write!(
            formatter,
            "frags:          {:>10} total, {:.2} per battle",
            self.frags, self.avg_frags,
        )
    }
}
