//! Error types for the bout engine.

use crate::strike::Strike;

/// Errors raised while setting up or running a bout.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoutError {
    /// The strike exists but has no entry in the damage table.
    #[error("Strike has no damage mapping: {0}")]
    InvalidStrike(Strike),

    /// A strike name could not be parsed.
    #[error("Unknown strike: {0}")]
    UnknownStrike(String),

    /// A stance name could not be parsed.
    #[error("Unknown stance: {0}")]
    UnknownStance(String),

    /// A round was requested after the bout was decided.
    #[error("The bout is already over")]
    BoutOver,
}
