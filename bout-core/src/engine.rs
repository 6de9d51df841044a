//! Round engine.
//!
//! A [`Bout`] is a small state machine: it waits for a round, resolves one
//! exchange per call, and stops once a fighter's stamina reaches zero.
//!
//! The red corner always strikes first. The blue corner only answers if it
//! is still standing, and a double knockout goes to red because blue's
//! stamina is checked first.
//!
//! If neither fighter carries any strikes no damage is ever dealt and the bout
//! never ends on its own. Drivers that need a bound should use
//! [`BoutConfig::max_rounds`](crate::session::BoutConfig).

use crate::error::BoutError;
use crate::fighter::Fighter;
use crate::rules::{apply_strike, Effect};
use crate::variance::Variance;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ring a fighter works from. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    Red,
    Blue,
}

impl Corner {
    pub fn opponent(&self) -> Corner {
        match self {
            Corner::Red => Corner::Blue,
            Corner::Blue => Corner::Red,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::Red => write!(f, "red"),
            Corner::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoutState {
    #[default]
    AwaitingRound,
    RoundInProgress,
    BoutOver { winner: Corner },
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The number of the round just fought, starting at 1.
    pub round: u32,
    pub effects: Vec<Effect>,
    pub winner: Option<Corner>,
}

/// Round counter and bout state, threaded through each round call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bout {
    round: u32,
    state: BoutState,
}

impl Bout {
    pub fn new() -> Self {
        Self {
            round: 1,
            state: BoutState::AwaitingRound,
        }
    }

    /// The number of the next round to be fought.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rounds_fought(&self) -> u32 {
        self.round - 1
    }

    pub fn state(&self) -> BoutState {
        self.state
    }

    pub fn winner(&self) -> Option<Corner> {
        match self.state {
            BoutState::BoutOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Fight one round between `red` and `blue`.
    ///
    /// An unmapped strike aborts the round with [`BoutError::InvalidStrike`].
    /// Damage already dealt earlier in that round stays applied and the round
    /// counter does not advance.
    pub fn fight_round<R: Rng + ?Sized>(
        &mut self,
        red: &mut Fighter,
        blue: &mut Fighter,
        rng: &mut R,
    ) -> Result<RoundReport, BoutError> {
        if self.is_over() {
            return Err(BoutError::BoutOver);
        }

        self.state = BoutState::RoundInProgress;
        let round = self.round;

        let effects = match exchange(red, blue, rng) {
            Ok(effects) => effects,
            Err(err) => {
                tracing::warn!(round, error = %err, "round aborted");
                self.state = BoutState::AwaitingRound;
                return Err(err);
            }
        };

        self.round += 1;

        let winner = decide_winner(red, blue);
        self.state = match winner {
            Some(winner) => {
                let name = match winner {
                    Corner::Red => &red.name,
                    Corner::Blue => &blue.name,
                };
                tracing::info!(round, winner = %name, loser = %winner.opponent(), "knockout");
                BoutState::BoutOver { winner }
            }
            None => BoutState::AwaitingRound,
        };

        Ok(RoundReport {
            round,
            effects,
            winner,
        })
    }
}

impl Default for Bout {
    fn default() -> Self {
        Self::new()
    }
}

/// Red strikes, then blue answers if still standing.
fn exchange<R: Rng + ?Sized>(
    red: &mut Fighter,
    blue: &mut Fighter,
    rng: &mut R,
) -> Result<Vec<Effect>, BoutError> {
    let mut effects = Vec::with_capacity(2);

    if let Some(effect) = strike_once(red, Corner::Red, blue, rng)? {
        effects.push(effect);
    }

    if blue.stamina() > 0 {
        if let Some(effect) = strike_once(blue, Corner::Blue, red, rng)? {
            effects.push(effect);
        }
    }

    Ok(effects)
}

/// Pick a strike uniformly from the attacker's loadout and land it.
///
/// Returns `None` when the loadout is empty.
fn strike_once<R: Rng + ?Sized>(
    attacker: &Fighter,
    corner: Corner,
    defender: &mut Fighter,
    rng: &mut R,
) -> Result<Option<Effect>, BoutError> {
    let Some(&strike) = attacker.strike_loadout.choose(rng) else {
        return Ok(None);
    };
    let variance = Variance::roll_with_rng(rng);
    apply_strike(attacker, corner, defender, strike, variance).map(Some)
}

/// Blue's knockout is checked first, so red takes a double knockout.
pub fn decide_winner(red: &Fighter, blue: &Fighter) -> Option<Corner> {
    if blue.is_knocked_out() {
        Some(Corner::Red)
    } else if red.is_knocked_out() {
        Some(Corner::Blue)
    } else {
        None
    }
}
