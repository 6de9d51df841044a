//! Fighter model: stat block, archetypes and the stamina resource.

use crate::error::BoutError;
use crate::strike::Strike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value every combat stat starts at.
pub const DEFAULT_STAT: i32 = 50;
/// Starting and maximum stamina.
pub const MAX_STAMINA: i32 = 100;
pub const STARTING_ENERGY: i32 = 100;
pub const STARTING_LEVEL: u8 = 1;

// ============================================================================
// Stats
// ============================================================================

/// The named attributes of a fighter.
///
/// Declaration order matters: it is the tie-break order when ranking stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    // Punches
    JabAccuracy,
    JabSpeed,
    CrossPower,
    CrossAccuracy,
    HookPower,
    HookSpeed,
    UppercutPower,
    UppercutAccuracy,
    // Kicks
    FrontKickSpeed,
    FrontKickPower,
    RoundhouseAccuracy,
    RoundhousePower,
    LowKickPower,
    LowKickDefense,
    // Clinch
    ElbowPower,
    KneePower,
    ClinchStriking,
    // Defense
    Footwork,
    HeadMovement,
    Chin,
    Stamina,
    // Meta
    Aggression,
    CounterTiming,
}

impl Stat {
    pub const COUNT: usize = 23;

    pub fn all() -> [Stat; Stat::COUNT] {
        use Stat::*;
        [
            JabAccuracy,
            JabSpeed,
            CrossPower,
            CrossAccuracy,
            HookPower,
            HookSpeed,
            UppercutPower,
            UppercutAccuracy,
            FrontKickSpeed,
            FrontKickPower,
            RoundhouseAccuracy,
            RoundhousePower,
            LowKickPower,
            LowKickDefense,
            ElbowPower,
            KneePower,
            ClinchStriking,
            Footwork,
            HeadMovement,
            Chin,
            Stamina,
            Aggression,
            CounterTiming,
        ]
    }

    /// Snake-case key, e.g. `jab_accuracy`.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::JabAccuracy => "jab_accuracy",
            Stat::JabSpeed => "jab_speed",
            Stat::CrossPower => "cross_power",
            Stat::CrossAccuracy => "cross_accuracy",
            Stat::HookPower => "hook_power",
            Stat::HookSpeed => "hook_speed",
            Stat::UppercutPower => "uppercut_power",
            Stat::UppercutAccuracy => "uppercut_accuracy",
            Stat::FrontKickSpeed => "front_kick_speed",
            Stat::FrontKickPower => "front_kick_power",
            Stat::RoundhouseAccuracy => "roundhouse_accuracy",
            Stat::RoundhousePower => "roundhouse_power",
            Stat::LowKickPower => "low_kick_power",
            Stat::LowKickDefense => "low_kick_defense",
            Stat::ElbowPower => "elbow_power",
            Stat::KneePower => "knee_power",
            Stat::ClinchStriking => "clinch_striking",
            Stat::Footwork => "footwork",
            Stat::HeadMovement => "head_movement",
            Stat::Chin => "chin",
            Stat::Stamina => "stamina",
            Stat::Aggression => "aggression",
            Stat::CounterTiming => "counter_timing",
        }
    }

    /// Display label, e.g. `Jab Accuracy`.
    pub fn label(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn default_value(&self) -> i32 {
        match self {
            Stat::Stamina => MAX_STAMINA,
            _ => DEFAULT_STAT,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fixed-size stat container indexed by [`Stat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    values: [i32; Stat::COUNT],
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat.index()] = value;
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::all().into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// The `n` highest stats, ties kept in declaration order.
    pub fn top(&self, n: usize) -> Vec<(Stat, i32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // sort_by is stable, so equal values keep declaration order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        let mut values = [DEFAULT_STAT; Stat::COUNT];
        for stat in Stat::all() {
            values[stat.index()] = stat.default_value();
        }
        Self { values }
    }
}

// ============================================================================
// Archetypes
// ============================================================================

/// Preset that overlays stat values when a fighter is created.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Archetype {
    #[default]
    Boxer,
    PressureBrawler,
    CounterSniper,
    /// An unrecognized tag. Behaves like a plain boxer.
    Other(String),
}

impl Archetype {
    /// Resolve a tag such as `"Pressure Brawler"` or `"counter-sniper"`.
    ///
    /// Never fails: anything unrecognized becomes [`Archetype::Other`].
    pub fn from_tag(tag: &str) -> Archetype {
        let normalized = tag.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "boxer" => Archetype::Boxer,
            "pressure brawler" => Archetype::PressureBrawler,
            "counter sniper" => Archetype::CounterSniper,
            _ => Archetype::Other(tag.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Archetype::Boxer => "Boxer",
            Archetype::PressureBrawler => "Pressure Brawler",
            Archetype::CounterSniper => "Counter Sniper",
            Archetype::Other(tag) => tag.as_str(),
        }
    }

    /// Stat values this archetype pins at creation.
    pub fn overlay(&self) -> &'static [(Stat, i32)] {
        match self {
            Archetype::PressureBrawler => &[
                (Stat::HookPower, 70),
                (Stat::Chin, 70),
                (Stat::Aggression, 80),
            ],
            Archetype::CounterSniper => &[
                (Stat::CounterTiming, 70),
                (Stat::HeadMovement, 70),
                (Stat::Footwork, 70),
            ],
            Archetype::Boxer | Archetype::Other(_) => &[],
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Orthodox,
    Southpaw,
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stance::Orthodox => write!(f, "orthodox"),
            Stance::Southpaw => write!(f, "southpaw"),
        }
    }
}

impl FromStr for Stance {
    type Err = BoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthodox" => Ok(Stance::Orthodox),
            "southpaw" => Ok(Stance::Southpaw),
            _ => Err(BoutError::UnknownStance(s.to_string())),
        }
    }
}

// ============================================================================
// Fighter
// ============================================================================

/// A combatant in a bout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub archetype: Archetype,
    pub level: u8,
    pub stats: StatBlock,
    /// Strikes picked from uniformly each round. May be empty.
    pub strike_loadout: Vec<Strike>,
    pub stance: Stance,
    /// Tracked and displayed, but no rule reads or changes it.
    pub energy: i32,
}

impl Fighter {
    /// Create a fighter with default stats and the archetype overlay applied.
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let mut fighter = Self {
            name: name.into(),
            archetype,
            level: STARTING_LEVEL,
            stats: StatBlock::default(),
            strike_loadout: Vec::new(),
            stance: Stance::default(),
            energy: STARTING_ENERGY,
        };
        fighter.apply_archetype();
        fighter
    }

    /// Write the archetype's overlay into the stat block. Idempotent.
    pub fn apply_archetype(&mut self) {
        for &(stat, value) in self.archetype.overlay() {
            self.stats.set(stat, value);
        }
    }

    pub fn with_loadout(mut self, loadout: impl IntoIterator<Item = Strike>) -> Self {
        self.strike_loadout = loadout.into_iter().collect();
        self
    }

    pub fn with_stat(mut self, stat: Stat, value: i32) -> Self {
        self.stats.set(stat, value);
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    pub fn stamina(&self) -> i32 {
        self.stats.get(Stat::Stamina)
    }

    pub fn is_knocked_out(&self) -> bool {
        self.stamina() <= 0
    }

    /// Subtract damage from stamina (no lower bound). Returns the new stamina.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let stamina = self.stamina() - amount;
        self.stats.set(Stat::Stamina, stamina);
        stamina
    }

    /// Add stamina, capped at [`MAX_STAMINA`]. Returns the amount actually recovered.
    pub fn recover(&mut self, amount: u32) -> i32 {
        let before = self.stamina();
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        let after = MAX_STAMINA.min(before.saturating_add(amount));
        self.stats.set(Stat::Stamina, after);
        after - before
    }

    pub fn top_stats(&self, n: usize) -> Vec<(Stat, i32)> {
        self.stats.top(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let fighter = Fighter::new("Ali", Archetype::Boxer);
        assert_eq!(fighter.stamina(), MAX_STAMINA);
        assert_eq!(fighter.stat(Stat::JabAccuracy), DEFAULT_STAT);
        assert_eq!(fighter.stat(Stat::CounterTiming), DEFAULT_STAT);
        assert_eq!(fighter.energy, STARTING_ENERGY);
        assert_eq!(fighter.level, STARTING_LEVEL);
        assert_eq!(fighter.stance, Stance::Orthodox);
        assert!(fighter.strike_loadout.is_empty());
    }

    #[test]
    fn test_pressure_brawler_overlay() {
        let fighter = Fighter::new("Frazier", Archetype::PressureBrawler);
        assert_eq!(fighter.stat(Stat::HookPower), 70);
        assert_eq!(fighter.stat(Stat::Chin), 70);
        assert_eq!(fighter.stat(Stat::Aggression), 80);
        assert_eq!(fighter.stat(Stat::Footwork), DEFAULT_STAT);
    }

    #[test]
    fn test_counter_sniper_overlay() {
        let fighter = Fighter::new("Whitaker", Archetype::CounterSniper);
        assert_eq!(fighter.stat(Stat::CounterTiming), 70);
        assert_eq!(fighter.stat(Stat::HeadMovement), 70);
        assert_eq!(fighter.stat(Stat::Footwork), 70);
        assert_eq!(fighter.stat(Stat::HookPower), DEFAULT_STAT);
    }

    #[test]
    fn test_unknown_archetype_keeps_defaults() {
        let archetype = Archetype::from_tag("Swarmer");
        assert_eq!(archetype, Archetype::Other("Swarmer".to_string()));

        let fighter = Fighter::new("Tyson", archetype);
        assert_eq!(fighter.stats, StatBlock::default());
        assert_eq!(fighter.archetype.name(), "Swarmer");
    }

    #[test]
    fn test_archetype_from_tag_variants() {
        assert_eq!(Archetype::from_tag("Pressure Brawler"), Archetype::PressureBrawler);
        assert_eq!(Archetype::from_tag("counter-sniper"), Archetype::CounterSniper);
        assert_eq!(Archetype::from_tag(" BOXER "), Archetype::Boxer);
    }

    #[test]
    fn test_overlay_idempotent() {
        for archetype in [
            Archetype::Boxer,
            Archetype::PressureBrawler,
            Archetype::CounterSniper,
            Archetype::Other("Slugger".to_string()),
        ] {
            let mut fighter = Fighter::new("Twice", archetype);
            let once = fighter.stats.clone();
            fighter.apply_archetype();
            assert_eq!(fighter.stats, once);
        }
    }

    #[test]
    fn test_recover_caps_at_max() {
        let mut fighter = Fighter::new("Rested", Archetype::Boxer).with_stat(Stat::Stamina, 90);
        assert_eq!(fighter.recover(20), 10);
        assert_eq!(fighter.stamina(), 100);

        let mut fighter = Fighter::new("Tired", Archetype::Boxer).with_stat(Stat::Stamina, 40);
        assert_eq!(fighter.recover(20), 20);
        assert_eq!(fighter.stamina(), 60);
    }

    #[test]
    fn test_recover_saturates_huge_amounts() {
        let mut fighter = Fighter::new("Fresh", Archetype::Boxer).with_stat(Stat::Stamina, 30);
        assert_eq!(fighter.recover(u32::MAX), 70);
        assert_eq!(fighter.stamina(), MAX_STAMINA);
    }

    #[test]
    fn test_stance_parsing() {
        assert_eq!("southpaw".parse::<Stance>(), Ok(Stance::Southpaw));
        assert_eq!(" Orthodox ".parse::<Stance>(), Ok(Stance::Orthodox));
        assert_eq!(
            "switch".parse::<Stance>(),
            Err(BoutError::UnknownStance("switch".to_string()))
        );
        let fighter = Fighter::new("Lefty", Archetype::Boxer).with_stance(Stance::Southpaw);
        assert_eq!(fighter.stance.to_string(), "southpaw");
    }

    #[test]
    fn test_damage_has_no_floor() {
        let mut fighter = Fighter::new("Glass", Archetype::Boxer).with_stat(Stat::Stamina, 10);
        assert_eq!(fighter.take_damage(35), -25);
        assert!(fighter.is_knocked_out());
    }

    #[test]
    fn test_top_stats_tie_break() {
        let boxer = Fighter::new("Even", Archetype::Boxer);
        let top = boxer.top_stats(3);
        assert_eq!(
            top,
            vec![
                (Stat::Stamina, 100),
                (Stat::JabAccuracy, 50),
                (Stat::JabSpeed, 50)
            ]
        );

        let brawler = Fighter::new("Brawler", Archetype::PressureBrawler);
        assert_eq!(
            brawler.top_stats(3),
            vec![
                (Stat::Stamina, 100),
                (Stat::Aggression, 80),
                (Stat::HookPower, 70)
            ]
        );
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(Stat::FrontKickSpeed.label(), "Front Kick Speed");
        assert_eq!(Stat::Chin.label(), "Chin");
        assert_eq!(Stat::all().len(), Stat::COUNT);
    }
}
