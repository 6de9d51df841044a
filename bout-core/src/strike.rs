//! Strike identifiers and the stat pairs that drive their damage.

use crate::error::BoutError;
use crate::fighter::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every strike a fighter may carry in a loadout.
///
/// Only the first six have an entry in the damage table. The clinch and low
/// kick strikes are legal loadout entries but cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strike {
    Jab,
    Cross,
    Hook,
    Uppercut,
    FrontKick,
    Roundhouse,
    LowKick,
    Elbow,
    Knee,
}

impl Strike {
    pub fn all() -> [Strike; 9] {
        [
            Strike::Jab,
            Strike::Cross,
            Strike::Hook,
            Strike::Uppercut,
            Strike::FrontKick,
            Strike::Roundhouse,
            Strike::LowKick,
            Strike::Elbow,
            Strike::Knee,
        ]
    }

    /// Snake-case identifier, e.g. `front_kick`.
    pub fn id(&self) -> &'static str {
        match self {
            Strike::Jab => "jab",
            Strike::Cross => "cross",
            Strike::Hook => "hook",
            Strike::Uppercut => "uppercut",
            Strike::FrontKick => "front_kick",
            Strike::Roundhouse => "roundhouse",
            Strike::LowKick => "low_kick",
            Strike::Elbow => "elbow",
            Strike::Knee => "knee",
        }
    }

    /// Narration name, e.g. `front kick`.
    pub fn name(&self) -> String {
        self.id().replace('_', " ")
    }

    /// The two attacker stats averaged into the attack score.
    pub fn stat_pair(&self) -> Option<[Stat; 2]> {
        match self {
            Strike::Jab => Some([Stat::JabAccuracy, Stat::JabSpeed]),
            Strike::Cross => Some([Stat::CrossPower, Stat::CrossAccuracy]),
            Strike::Hook => Some([Stat::HookPower, Stat::HookSpeed]),
            Strike::Uppercut => Some([Stat::UppercutPower, Stat::UppercutAccuracy]),
            Strike::FrontKick => Some([Stat::FrontKickPower, Stat::FrontKickSpeed]),
            Strike::Roundhouse => Some([Stat::RoundhousePower, Stat::RoundhouseAccuracy]),
            Strike::LowKick | Strike::Elbow | Strike::Knee => None,
        }
    }

    pub fn has_damage_mapping(&self) -> bool {
        self.stat_pair().is_some()
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strike {
    type Err = BoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Strike::all()
            .into_iter()
            .find(|strike| strike.id() == normalized)
            .ok_or_else(|| BoutError::UnknownStrike(s.trim().to_string()))
    }
}

/// Parse a comma-separated loadout such as `jab,cross,hook`.
///
/// An empty string yields an empty loadout.
pub fn parse_loadout(list: &str) -> Result<Vec<Strike>, BoutError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Strike::from_str)
        .collect()
}
