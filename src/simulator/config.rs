//! Simulation configuration.

use crate::constants::{DEFAULT_NUM_GAMES, OUT_CAP};
use crate::error::{SimError, SimResult};

/// Configuration for a batch of games.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to simulate
    pub num_games: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Outs that end a game (54 for nine innings)
    pub out_cap: u32,

    /// Render every play of every game
    pub show_steps: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_games: DEFAULT_NUM_GAMES,
            seed: None,
            out_cap: OUT_CAP,
            show_steps: false,
        }
    }
}

impl SimConfig {
    /// One game, narrated play by play.
    pub fn single_game(seed: Option<u64>) -> Self {
        Self {
            num_games: 1,
            seed,
            show_steps: true,
            ..Default::default()
        }
    }

    /// Reproducible batch for tests and comparisons.
    pub fn seeded(num_games: u32, seed: u64) -> Self {
        Self {
            num_games,
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.num_games == 0 {
            return Err(SimError::InvalidGameCount(self.num_games));
        }
        if self.out_cap == 0 {
            return Err(SimError::InvalidOutCap(self.out_cap));
        }
        Ok(())
    }
}
