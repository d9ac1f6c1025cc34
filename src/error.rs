//! Error types for the simulator.

use thiserror::Error;

/// Everything that can abort a game or a batch of games.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A die value outside 1..=6, or a pair not in ascending order.
    #[error("invalid dice pair ({first}, {second}): values must be 1-6 and sorted ascending")]
    InvalidDice { first: u8, second: u8 },

    /// The resolver has no play for this pair.
    #[error("no play mapped to dice pair ({first}, {second})")]
    UnmappedRoll { first: u8, second: u8 },

    #[error("number of games must be positive, got {0}")]
    InvalidGameCount(u32),

    #[error("out cap must be positive, got {0}")]
    InvalidOutCap(u32),

    /// The game passed the play sanity bound without reaching the out cap.
    #[error("game did not finish after {plays} plays")]
    RunawayGame { plays: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
