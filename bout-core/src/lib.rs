//! Striking bout engine.
//!
//! This crate provides:
//! - A stat-driven fighter model with archetype presets
//! - The strike table and damage formula
//! - A round engine that resolves exchanges until a knockout
//! - A session driver with the between-round player choice
//!
//! # Quick Start
//!
//! ```
//! use bout_core::{BoutConfig, BoutSession, BetweenRounds};
//!
//! let mut session = BoutSession::new(BoutConfig::new().with_seed(7));
//!
//! while session.outcome().is_none() {
//!     let report = session.play_round().expect("default loadouts are valid");
//!     for effect in &report.effects {
//!         println!("{}", effect.narrative());
//!     }
//!     if session.outcome().is_none() {
//!         session.choose(BetweenRounds::Rest).expect("bout is still running");
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod fighter;
pub mod rules;
pub mod session;
pub mod strike;
pub mod testing;
pub mod variance;

// Primary public API
pub use engine::{Bout, BoutState, Corner, RoundReport};
pub use error::BoutError;
pub use fighter::{Archetype, Fighter, Stance, Stat, StatBlock};
pub use rules::{damage, damage_with_rng, damage_with_variance, Effect};
pub use session::{BetweenRounds, BoutConfig, BoutSession, ChoiceOutcome, FighterConfig, Outcome};
pub use strike::{parse_loadout, Strike};
pub use testing::{BoutHarness, FixedDraw};
pub use variance::Variance;
