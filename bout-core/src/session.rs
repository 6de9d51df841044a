//! BoutSession - the primary public API for running a bout.
//!
//! This module wraps the fighters, the round engine and the RNG into a single
//! driver. The player always works the red corner; the between-round rest
//! only ever helps the player.

use crate::engine::{Bout, Corner, RoundReport};
use crate::error::BoutError;
use crate::fighter::{Archetype, Fighter, Stance};
use crate::rules::{apply_rest, Effect, REST_RECOVERY};
use crate::strike::Strike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How to build one corner's fighter.
#[derive(Debug, Clone)]
pub struct FighterConfig {
    pub name: String,
    pub archetype: Archetype,
    pub loadout: Vec<Strike>,
    pub stance: Stance,
}

impl FighterConfig {
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            name: name.into(),
            archetype,
            loadout: Vec::new(),
            stance: Stance::default(),
        }
    }

    /// Pressure Brawler with jab, cross and hook.
    pub fn default_player() -> Self {
        Self::new("Player", Archetype::PressureBrawler)
            .with_loadout([Strike::Jab, Strike::Cross, Strike::Hook])
    }

    /// Counter Sniper with front kick and roundhouse.
    pub fn default_opponent() -> Self {
        Self::new("CPU", Archetype::CounterSniper)
            .with_loadout([Strike::FrontKick, Strike::Roundhouse])
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    pub fn with_loadout(mut self, loadout: impl IntoIterator<Item = Strike>) -> Self {
        self.loadout = loadout.into_iter().collect();
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    /// Create the fighter this config describes.
    pub fn build(&self) -> Fighter {
        Fighter::new(self.name.clone(), self.archetype.clone())
            .with_loadout(self.loadout.iter().copied())
            .with_stance(self.stance)
    }
}

/// Configuration for a new bout.
#[derive(Debug, Clone)]
pub struct BoutConfig {
    /// Red corner, controlled by the player.
    pub player: FighterConfig,

    /// Blue corner.
    pub opponent: FighterConfig,

    /// Seed for reproducible bouts. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Stop as a no-contest after this many rounds without a knockout.
    pub max_rounds: Option<u32>,

    /// Stamina offered by the rest choice.
    pub rest_amount: u32,
}

impl BoutConfig {
    pub fn new() -> Self {
        Self {
            player: FighterConfig::default_player(),
            opponent: FighterConfig::default_opponent(),
            seed: None,
            max_rounds: None,
            rest_amount: REST_RECOVERY,
        }
    }

    pub fn with_player(mut self, player: FighterConfig) -> Self {
        self.player = player;
        self
    }

    pub fn with_opponent(mut self, opponent: FighterConfig) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_rest_amount(mut self, amount: u32) -> Self {
        self.rest_amount = amount;
        self
    }
}

impl Default for BoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Between-round menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BetweenRounds {
    #[default]
    KeepStrategy,
    /// Not implemented yet; behaves like keeping the strategy.
    ChangeStrikes,
    Rest,
}

impl BetweenRounds {
    /// Parse a menu line. Anything other than `2` or `3` keeps the strategy.
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "2" => BetweenRounds::ChangeStrikes,
            "3" => BetweenRounds::Rest,
            _ => BetweenRounds::KeepStrategy,
        }
    }
}

/// What a between-round choice did.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceOutcome {
    Kept,
    StrikesUnchanged,
    Rested(Effect),
}

/// How a bout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Knockout { winner: Corner, round: u32 },
    NoContest { rounds: u32 },
}

/// A bout between the player and an opponent.
pub struct BoutSession<R = StdRng> {
    red: Fighter,
    blue: Fighter,
    bout: Bout,
    rng: R,
    config: BoutConfig,
    outcome: Option<Outcome>,
}

impl BoutSession<StdRng> {
    /// Create a session, seeding the RNG from the config or from entropy.
    pub fn new(config: BoutConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> BoutSession<R> {
    /// Create a session with a caller-supplied RNG. `config.seed` is ignored.
    pub fn with_rng(config: BoutConfig, rng: R) -> Self {
        let red = config.player.build();
        let blue = config.opponent.build();
        Self::from_fighters(config, red, blue, rng)
    }

    /// Create a session around fighters that were prepared elsewhere.
    pub fn from_fighters(config: BoutConfig, red: Fighter, blue: Fighter, rng: R) -> Self {
        tracing::debug!(red = %red.name, blue = %blue.name, "bout created");
        Self {
            red,
            blue,
            bout: Bout::new(),
            rng,
            config,
            outcome: None,
        }
    }

    /// Fight the next round.
    pub fn play_round(&mut self) -> Result<RoundReport, BoutError> {
        if self.outcome.is_some() {
            return Err(BoutError::BoutOver);
        }

        let report = self
            .bout
            .fight_round(&mut self.red, &mut self.blue, &mut self.rng)?;

        if let Some(winner) = report.winner {
            self.outcome = Some(Outcome::Knockout {
                winner,
                round: report.round,
            });
        } else if let Some(limit) = self.config.max_rounds {
            if self.bout.rounds_fought() >= limit {
                tracing::info!(rounds = limit, "round limit reached");
                self.outcome = Some(Outcome::NoContest { rounds: limit });
            }
        }

        Ok(report)
    }

    /// Apply the player's between-round choice.
    pub fn choose(&mut self, choice: BetweenRounds) -> Result<ChoiceOutcome, BoutError> {
        if self.outcome.is_some() {
            return Err(BoutError::BoutOver);
        }

        Ok(match choice {
            BetweenRounds::KeepStrategy => ChoiceOutcome::Kept,
            BetweenRounds::ChangeStrikes => ChoiceOutcome::StrikesUnchanged,
            BetweenRounds::Rest => ChoiceOutcome::Rested(apply_rest(
                &mut self.red,
                Corner::Red,
                self.config.rest_amount,
            )),
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn bout(&self) -> &Bout {
        &self.bout
    }

    pub fn config(&self) -> &BoutConfig {
        &self.config
    }

    /// The red corner.
    pub fn player(&self) -> &Fighter {
        &self.red
    }

    /// The blue corner.
    pub fn opponent(&self) -> &Fighter {
        &self.blue
    }

    pub fn fighter(&self, corner: Corner) -> &Fighter {
        match corner {
            Corner::Red => &self.red,
            Corner::Blue => &self.blue,
        }
    }

    /// The knockout winner, if there is one.
    pub fn winner(&self) -> Option<&Fighter> {
        self.bout.winner().map(|corner| self.fighter(corner))
    }
}
