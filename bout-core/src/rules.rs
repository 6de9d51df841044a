//! Damage rules and the effects they produce.
//!
//! The pipeline mirrors how a round is narrated:
//! 1. A strike is resolved into a damage number by [`damage_with_variance`]
//! 2. The damage is applied to the defender with [`apply_strike`]
//! 3. The resulting [`Effect`] records what happened for narration and tests
//!
//! Nothing here touches I/O, and every random input comes from the caller.

use crate::engine::Corner;
use crate::error::BoutError;
use crate::fighter::{Fighter, Stat};
use crate::strike::Strike;
use crate::variance::Variance;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest damage any landed strike can deal.
pub const MIN_DAMAGE: i32 = 1;
/// Fraction of the defense score subtracted from the attack.
pub const DEFENSE_WEIGHT: f64 = 0.5;
/// Stamina restored by the between-round rest.
pub const REST_RECOVERY: u32 = 20;

/// Mean of the attacker's two stats for this strike.
pub fn attack_score(attacker: &Fighter, strike: Strike) -> Result<f64, BoutError> {
    let [first, second] = strike
        .stat_pair()
        .ok_or(BoutError::InvalidStrike(strike))?;
    Ok(f64::from(attacker.stat(first) + attacker.stat(second)) / 2.0)
}

/// Mean of the defender's head movement and footwork, regardless of strike.
pub fn defense_score(defender: &Fighter) -> f64 {
    f64::from(defender.stat(Stat::HeadMovement) + defender.stat(Stat::Footwork)) / 2.0
}

/// Compute damage for a strike with an explicit variance.
///
/// `max(1, attack * factor - defense / 2)`, truncated toward zero.
pub fn damage_with_variance(
    attacker: &Fighter,
    defender: &Fighter,
    strike: Strike,
    variance: Variance,
) -> Result<i32, BoutError> {
    let attack = attack_score(attacker, strike)?;
    let defense = defense_score(defender);
    let raw = (attack * variance.factor() - defense * DEFENSE_WEIGHT).max(f64::from(MIN_DAMAGE));
    Ok(raw.trunc() as i32)
}

/// Compute damage, drawing the variance from `rng`.
pub fn damage_with_rng<R: Rng + ?Sized>(
    attacker: &Fighter,
    defender: &Fighter,
    strike: Strike,
    rng: &mut R,
) -> Result<i32, BoutError> {
    damage_with_variance(attacker, defender, strike, Variance::roll_with_rng(rng))
}

/// Compute damage using the thread-local RNG.
pub fn damage(attacker: &Fighter, defender: &Fighter, strike: Strike) -> Result<i32, BoutError> {
    damage_with_variance(attacker, defender, strike, Variance::roll())
}

/// A state change produced during a bout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// A strike landed and reduced the defender's stamina.
    StrikeLanded {
        attacker: Corner,
        attacker_name: String,
        strike: Strike,
        damage: i32,
        variance: Variance,
        defender_stamina: i32,
        knocked_out: bool,
    },

    /// A fighter rested between rounds.
    Rested {
        corner: Corner,
        name: String,
        /// Stamina offered by the rest, before the cap.
        amount: u32,
        recovered: i32,
        new_stamina: i32,
    },
}

impl Effect {
    /// One line of ring-side narration.
    pub fn narrative(&self) -> String {
        match self {
            Effect::StrikeLanded {
                attacker: Corner::Red,
                attacker_name,
                strike,
                damage,
                ..
            } => format!("{attacker_name} lands a {strike} for {damage} damage!"),
            Effect::StrikeLanded {
                attacker: Corner::Blue,
                attacker_name,
                strike,
                damage,
                ..
            } => format!("{attacker_name} counters with a {strike} for {damage} damage!"),
            Effect::Rested { name, amount, .. } => {
                format!("{name} rests and recovers {amount} stamina!")
            }
        }
    }
}

/// Resolve a strike and subtract the damage from the defender.
pub fn apply_strike(
    attacker: &Fighter,
    attacker_corner: Corner,
    defender: &mut Fighter,
    strike: Strike,
    variance: Variance,
) -> Result<Effect, BoutError> {
    let damage = damage_with_variance(attacker, defender, strike, variance)?;
    let defender_stamina = defender.take_damage(damage);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        %strike,
        damage,
        defender_stamina,
        "strike landed"
    );

    Ok(Effect::StrikeLanded {
        attacker: attacker_corner,
        attacker_name: attacker.name.clone(),
        strike,
        damage,
        variance,
        defender_stamina,
        knocked_out: defender_stamina <= 0,
    })
}

/// Restore stamina to a resting fighter, capped at the maximum.
pub fn apply_rest(fighter: &mut Fighter, corner: Corner, amount: u32) -> Effect {
    let recovered = fighter.recover(amount);
    tracing::debug!(fighter = %fighter.name, recovered, stamina = fighter.stamina(), "rested");

    Effect::Rested {
        corner,
        name: fighter.name.clone(),
        amount,
        recovered,
        new_stamina: fighter.stamina(),
    }
}
