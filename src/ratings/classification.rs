//! Six-tier player classification, one bracket table per statistic kind.

use std::fmt::{self, Display, Formatter};

/// Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlayerClass {
    VeryBad,
    Bad,
    Average,
    Good,
    VeryGood,
    Unique,
}

impl PlayerClass {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryBad => "very bad",
            Self::Bad => "bad",
            Self::Average => "average",
            Self::Good => "good",
            Self::VeryGood => "very good",
            Self::Unique => "unique",
        }
    }
}

impl Display for PlayerClass {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// A classifiable statistic. WN6 and WN7 share a table, as do WN8 and XTE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Wn6,
    Wn7,
    Wn8,
    Eff,
    Xte,
    WinRate,
    Battles,
    Damage,
    Frags,
}

/// Inclusive brackets for the five lower classes, worst first.
type Brackets = [(i64, i64); 5];

const WN6_BRACKETS: Brackets = [(0, 469), (470, 859), (860, 1224), (1225, 1634), (1635, 1989)];
const WN8_BRACKETS: Brackets = [(0, 314), (315, 754), (755, 1314), (1315, 1964), (1965, 2524)];
const EFF_BRACKETS: Brackets = [(0, 629), (630, 859), (860, 1139), (1140, 1459), (1460, 1734)];
const WIN_RATE_BRACKETS: Brackets = [(0, 46), (47, 48), (49, 51), (52, 56), (57, 64)];

// The first two brackets overlap between 1001 and 1500; the first match wins.
const BATTLES_BRACKETS: Brackets =
    [(0, 1500), (1001, 4000), (4001, 10000), (10001, 15000), (15001, 20000)];

const DAMAGE_BRACKETS: Brackets = [(0, 500), (501, 750), (751, 1000), (1001, 1800), (1801, 2500)];

// Starts at one: a zero falls through every bracket into the top tier.
const FRAGS_BRACKETS: Brackets = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)];

const CLASSES: [PlayerClass; 5] = [
    PlayerClass::VeryBad,
    PlayerClass::Bad,
    PlayerClass::Average,
    PlayerClass::Good,
    PlayerClass::VeryGood,
];

/// Looks the value up in the kind's bracket table.
///
/// The value is truncated to whole points first. Anything above the topmost
/// bracket is [`PlayerClass::Unique`].
#[must_use]
pub fn classify(kind: StatKind, value: f64) -> PlayerClass {
    let brackets = match kind {
        StatKind::Wn6 | StatKind::Wn7 => &WN6_BRACKETS,
        StatKind::Wn8 | StatKind::Xte => &WN8_BRACKETS,
        StatKind::Eff => &EFF_BRACKETS,
        StatKind::WinRate => &WIN_RATE_BRACKETS,
        StatKind::Battles => &BATTLES_BRACKETS,
        StatKind::Damage => &DAMAGE_BRACKETS,
        StatKind::Frags => &FRAGS_BRACKETS,
    };
    let value = value as i64;
    for (&(low, high), class) in brackets.iter().zip(CLASSES) {
        if (low..=high).contains(&value) {
            return class;
        }
    }
    PlayerClass::Unique
}
