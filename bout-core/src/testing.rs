//! Testing utilities for bouts.
//!
//! This module provides tools for deterministic tests:
//! - `FixedDraw`, an RNG that pins every variance draw to one value
//! - `BoutHarness` for scripted bout scenarios
//! - Assertion helpers for verifying fighter state

use crate::engine::{Corner, RoundReport};
use crate::error::BoutError;
use crate::fighter::Fighter;
use crate::rules::Effect;
use crate::session::{BetweenRounds, BoutConfig, BoutSession, ChoiceOutcome, FighterConfig};
use rand::{Error, RngCore};

/// An RNG whose uniform `f64` draws always equal the configured value.
///
/// Integer draws are always zero, so uniform strike selection always picks
/// the first strike in a loadout.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw {
    bits: u64,
}

impl FixedDraw {
    /// Pin draws to `draw`, clamped into `[0, 1)`.
    pub fn new(draw: f64) -> Self {
        // Standard f64 sampling keeps the top 53 bits of next_u64
        let draw = draw.clamp(0.0, 1.0 - f64::EPSILON);
        let mantissa = (draw * (1u64 << 53) as f64) as u64;
        Self {
            bits: mantissa << 11,
        }
    }

    /// Draw 0.5, a variance multiplier of exactly 1.0.
    pub fn neutral() -> Self {
        Self::new(0.5)
    }
}

impl RngCore for FixedDraw {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        self.bits
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Test harness for running bout scenarios.
pub struct BoutHarness {
    /// The session under test.
    pub session: BoutSession<FixedDraw>,
}

impl BoutHarness {
    /// Default bout with every variance draw at 0.5.
    pub fn new() -> Self {
        Self::with_config(BoutConfig::new(), FixedDraw::neutral())
    }

    pub fn with_config(config: BoutConfig, rng: FixedDraw) -> Self {
        Self {
            session: BoutSession::with_rng(config, rng),
        }
    }

    /// Harness around two prepared fighters.
    pub fn with_fighters(red: Fighter, blue: Fighter) -> Self {
        Self {
            session: BoutSession::from_fighters(
                BoutConfig::new(),
                red,
                blue,
                FixedDraw::neutral(),
            ),
        }
    }

    /// Harness built from fighter configs.
    pub fn with_corners(red: FighterConfig, blue: FighterConfig) -> Self {
        let config = BoutConfig::new().with_player(red).with_opponent(blue);
        Self::with_config(config, FixedDraw::neutral())
    }

    /// Play one round.
    pub fn round(&mut self) -> Result<RoundReport, BoutError> {
        self.session.play_round()
    }

    /// Play one round, then make a between-round choice if the bout continues.
    pub fn round_then(&mut self, choice: BetweenRounds) -> Result<RoundReport, BoutError> {
        let report = self.session.play_round()?;
        if self.session.outcome().is_none() {
            self.session.choose(choice)?;
        }
        Ok(report)
    }

    /// Play until the bout is decided or `limit` rounds have been fought.
    pub fn fight_to_finish(&mut self, limit: u32) -> Result<Vec<RoundReport>, BoutError> {
        let mut reports = Vec::new();
        while self.session.outcome().is_none() && self.session.bout().rounds_fought() < limit {
            reports.push(self.session.play_round()?);
        }
        Ok(reports)
    }

    /// Rest the player and return the effect.
    pub fn rest(&mut self) -> Result<Effect, BoutError> {
        match self.session.choose(BetweenRounds::Rest)? {
            ChoiceOutcome::Rested(effect) => Ok(effect),
            other => panic!("Expected rest, got {other:?}"),
        }
    }

    pub fn stamina(&self, corner: Corner) -> i32 {
        self.session.fighter(corner).stamina()
    }

    /// Assert a corner's stamina.
    pub fn assert_stamina(&self, corner: Corner, expected: i32) {
        let actual = self.stamina(corner);
        assert_eq!(
            actual, expected,
            "Expected {corner} stamina {expected}, got {actual}"
        );
    }

    /// Assert the bout was won by `corner`.
    pub fn assert_winner(&self, corner: Corner) {
        assert_eq!(
            self.session.bout().winner(),
            Some(corner),
            "Expected {corner} to win"
        );
    }

    /// Assert the bout is still running.
    pub fn assert_undecided(&self) {
        assert!(
            self.session.outcome().is_none(),
            "Expected an undecided bout, got {:?}",
            self.session.outcome()
        );
    }
}

impl Default for BoutHarness {
    fn default() -> Self {
        Self::new()
    }
}
