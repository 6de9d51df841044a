//! Random variance applied to every attack score.
//!
//! A variance is built from a single uniform draw in `[0, 1)` and scales the
//! attack score into the `[0.9, 1.1)` band. Drawing through a caller-supplied
//! RNG keeps bouts reproducible under a seed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest multiplier a variance can produce.
pub const VARIANCE_FLOOR: f64 = 0.9;
/// Width of the multiplier band above the floor.
pub const VARIANCE_SPREAD: f64 = 0.2;

/// A resolved variance roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variance {
    draw: f64,
}

impl Variance {
    /// Build a variance from a uniform draw. Values outside `[0, 1)` are clamped.
    pub fn from_draw(draw: f64) -> Self {
        let draw = if draw.is_nan() {
            0.0
        } else {
            draw.clamp(0.0, 1.0 - f64::EPSILON)
        };
        Self { draw }
    }

    /// The draw that yields a multiplier of exactly 1.0.
    pub fn neutral() -> Self {
        Self::from_draw(0.5)
    }

    /// Roll using the thread-local RNG.
    pub fn roll() -> Self {
        Self::roll_with_rng(&mut rand::thread_rng())
    }

    /// Roll with a specific RNG (useful for testing).
    pub fn roll_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.gen::<f64>())
    }

    pub fn draw(&self) -> f64 {
        self.draw
    }

    /// Multiplier in `[0.9, 1.1)`.
    pub fn factor(&self) -> f64 {
        VARIANCE_FLOOR + VARIANCE_SPREAD * self.draw
    }
}

impl Default for Variance {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{:.2}", self.factor())
    }
}
